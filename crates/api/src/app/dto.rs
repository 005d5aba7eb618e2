//! Request DTOs and JSON mapping helpers.
//!
//! Responses are built through the `*_to_json` helpers below rather than by
//! serializing the models directly; that is what keeps the password hash
//! out of every representation that leaves the server.

use serde::Deserialize;
use validator::Validate;

use mesto_core::{Card, User};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 2, max = 30))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 30))]
    pub about: Option<String>,
    #[validate(url)]
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 30))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 30))]
    pub about: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAvatarRequest {
    #[validate(url)]
    pub avatar: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCardRequest {
    #[validate(length(min = 2, max = 30))]
    pub name: String,
    #[validate(url)]
    pub link: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn user_to_json(user: &User) -> serde_json::Value {
    serde_json::json!({
        "_id": user.id.to_hex(),
        "name": user.name,
        "about": user.about,
        "avatar": user.avatar,
        "email": user.email,
    })
}

pub fn card_to_json(card: &Card) -> serde_json::Value {
    serde_json::json!({
        "_id": card.id.to_hex(),
        "name": card.name,
        "link": card.link,
        "owner": card.owner.to_hex(),
        "likes": card.likes.iter().map(|id| id.to_hex()).collect::<Vec<_>>(),
        "createdAt": card.created_at.to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesto_core::UserId;

    #[test]
    fn user_json_never_contains_the_password_field() {
        let user = User::new(
            "user@example.com".to_string(),
            "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            None,
            None,
            None,
        );

        let json = user_to_json(&user);
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "user@example.com");
        assert_eq!(json["_id"].as_str().unwrap().len(), 24);
    }

    #[test]
    fn card_json_carries_hex_ids_and_likes() {
        let owner = UserId::new();
        let liker = UserId::new();
        let mut card = Card::new(
            "Эльбрус".to_string(),
            "https://example.com/p.jpg".to_string(),
            owner,
        );
        card.likes.push(liker);

        let json = card_to_json(&card);
        assert_eq!(json["owner"], owner.to_hex());
        assert_eq!(json["likes"][0], liker.to_hex());
    }

    #[test]
    fn signup_rejects_short_name_and_bad_links() {
        let too_short: SignupRequest = serde_json::from_value(serde_json::json!({
            "email": "user@example.com",
            "password": "secret",
            "name": "Я",
        }))
        .unwrap();
        assert!(too_short.validate().is_err());

        let bad_avatar: SignupRequest = serde_json::from_value(serde_json::json!({
            "email": "user@example.com",
            "password": "secret",
            "avatar": "not-a-url",
        }))
        .unwrap();
        assert!(bad_avatar.validate().is_err());

        let minimal: SignupRequest = serde_json::from_value(serde_json::json!({
            "email": "user@example.com",
            "password": "secret",
        }))
        .unwrap();
        assert!(minimal.validate().is_ok());
    }

    #[test]
    fn card_request_requires_a_real_url() {
        let bad: CreateCardRequest = serde_json::from_value(serde_json::json!({
            "name": "Эльбрус",
            "link": "картинка",
        }))
        .unwrap();
        assert!(bad.validate().is_err());

        let ok: CreateCardRequest = serde_json::from_value(serde_json::json!({
            "name": "Эльбрус",
            "link": "https://example.com/p.jpg",
        }))
        .unwrap();
        assert!(ok.validate().is_ok());
    }
}
