//! `mesto-auth` — pure credential logic.
//!
//! This crate is intentionally decoupled from HTTP and storage: it signs and
//! verifies session tokens and hashes passwords, nothing else.

pub mod claims;
pub mod password;
pub mod token;

pub use claims::Claims;
pub use token::{Hs256TokenCodec, InvalidToken, TokenVerifier, session_ttl, SESSION_TTL_SECS};
