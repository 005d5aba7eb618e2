//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a user record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(ObjectId);

/// Identifier of a photo card record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(ObjectId);

macro_rules! impl_object_id_newtype {
    ($t:ty) => {
        impl $t {
            /// Create a fresh identifier.
            ///
            /// Prefer passing IDs explicitly in tests for determinism.
            pub fn new() -> Self {
                Self(ObjectId::new())
            }

            pub fn from_object_id(oid: ObjectId) -> Self {
                Self(oid)
            }

            pub fn as_object_id(&self) -> ObjectId {
                self.0
            }

            /// 24-character lowercase hex form (the wire representation).
            pub fn to_hex(&self) -> String {
                self.0.to_hex()
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<ObjectId> for $t {
            fn from(value: ObjectId) -> Self {
                Self(value)
            }
        }

        impl From<$t> for ObjectId {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            /// Accepts exactly 24 hex characters; anything else is a
            /// validation failure, raised before any store call runs.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let oid = ObjectId::parse_str(s)
                    .map_err(|_| DomainError::validation("Некорректный идентификатор"))?;
                Ok(Self(oid))
            }
        }
    };
}

impl_object_id_newtype!(UserId);
impl_object_id_newtype!(CardId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_24_hex_characters() {
        let id: UserId = "6803cf680b009b9f44987d41".parse().unwrap();
        assert_eq!(id.to_hex(), "6803cf680b009b9f44987d41");
    }

    #[test]
    fn rejects_wrong_length() {
        let err = "6803cf680b009b9f44987d4".parse::<UserId>().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_hex_input() {
        let err = "zzzzzzzzzzzzzzzzzzzzzzzz".parse::<CardId>().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let id = CardId::new();
        let parsed: CardId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
