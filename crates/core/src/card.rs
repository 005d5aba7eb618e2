//! Photo card model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{CardId, UserId};

/// A photo card, as persisted in the `cards` collection.
///
/// `owner` is fixed at creation and never updated. `likes` is a set: a user
/// appears at most once, enforced by the add/remove-self store operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: CardId,
    pub name: String,
    pub link: String,
    pub owner: UserId,
    pub likes: Vec<UserId>,
    #[serde(
        rename = "createdAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

impl Card {
    pub fn new(name: String, link: String, owner: UserId) -> Self {
        Self {
            id: CardId::new(),
            name,
            link,
            owner,
            likes: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner == user
    }

    pub fn is_liked_by(&self, user: UserId) -> bool {
        self.likes.contains(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_starts_with_no_likes() {
        let owner = UserId::new();
        let card = Card::new("Эльбрус".to_string(), "https://example.com/p.jpg".to_string(), owner);

        assert!(card.likes.is_empty());
        assert!(card.is_owned_by(owner));
        assert!(!card.is_liked_by(UserId::new()));
    }
}
