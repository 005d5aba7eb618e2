//! User model and profile placeholder defaults.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// Placeholder profile values applied when signup omits the field.
pub const DEFAULT_NAME: &str = "Жак-Ив Кусто";
pub const DEFAULT_ABOUT: &str = "Исследователь";
pub const DEFAULT_AVATAR: &str =
    "https://pictures.s3.yandex.net/resources/jacques-cousteau_1604399756.png";

/// A registered user, as persisted in the `users` collection.
///
/// `password` holds the bcrypt hash. The struct intentionally keeps it: the
/// signin flow needs it for verification. It must never reach a client;
/// responses are built via explicit JSON mapping that omits the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Build a new user record, filling omitted profile fields with the
    /// placeholder defaults.
    pub fn new(
        email: String,
        password_hash: String,
        name: Option<String>,
        about: Option<String>,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            name: name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            about: about.unwrap_or_else(|| DEFAULT_ABOUT.to_string()),
            avatar: avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            email,
            password: password_hash,
        }
    }
}
