use std::sync::RwLock;

use async_trait::async_trait;

use mesto_core::{Card, CardId, DomainError, DomainResult, UserId};

use super::CardStore;

/// In-memory card store.
///
/// Intended for tests/dev. Set mutations run under one write lock, matching
/// the atomicity of `$addToSet`/`$pull` on the MongoDB side.
#[derive(Debug, Default)]
pub struct InMemoryCardStore {
    cards: RwLock<Vec<Card>>,
}

impl InMemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(_: impl Sized) -> DomainError {
    DomainError::internal("card store lock poisoned")
}

#[async_trait]
impl CardStore for InMemoryCardStore {
    async fn insert(&self, card: Card) -> DomainResult<Card> {
        self.cards.write().map_err(poisoned)?.push(card.clone());
        Ok(card)
    }

    async fn find_all(&self) -> DomainResult<Vec<Card>> {
        Ok(self.cards.read().map_err(poisoned)?.clone())
    }

    async fn find_by_id(&self, id: CardId) -> DomainResult<Option<Card>> {
        let cards = self.cards.read().map_err(poisoned)?;
        Ok(cards.iter().find(|c| c.id == id).cloned())
    }

    async fn delete_owned(&self, id: CardId, owner: UserId) -> DomainResult<Option<Card>> {
        let mut cards = self.cards.write().map_err(poisoned)?;
        let Some(pos) = cards.iter().position(|c| c.id == id && c.owner == owner) else {
            return Ok(None);
        };
        Ok(Some(cards.remove(pos)))
    }

    async fn add_like(&self, id: CardId, user: UserId) -> DomainResult<Option<Card>> {
        let mut cards = self.cards.write().map_err(poisoned)?;
        let Some(card) = cards.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if !card.likes.contains(&user) {
            card.likes.push(user);
        }
        Ok(Some(card.clone()))
    }

    async fn remove_like(&self, id: CardId, user: UserId) -> DomainResult<Option<Card>> {
        let mut cards = self.cards.write().map_err(poisoned)?;
        let Some(card) = cards.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        card.likes.retain(|liker| *liker != user);
        Ok(Some(card.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_card(owner: UserId) -> Card {
        Card::new("Эльбрус".to_string(), "https://example.com/p.jpg".to_string(), owner)
    }

    #[tokio::test]
    async fn liking_twice_keeps_one_entry() {
        let store = InMemoryCardStore::new();
        let liker = UserId::new();
        let card = store.insert(test_card(UserId::new())).await.unwrap();

        store.add_like(card.id, liker).await.unwrap();
        let after = store.add_like(card.id, liker).await.unwrap().unwrap();

        assert_eq!(after.likes, vec![liker]);
    }

    #[tokio::test]
    async fn unliking_an_unliked_card_is_a_noop() {
        let store = InMemoryCardStore::new();
        let card = store.insert(test_card(UserId::new())).await.unwrap();

        let after = store.remove_like(card.id, UserId::new()).await.unwrap().unwrap();

        assert!(after.likes.is_empty());
        assert_eq!(after, store.find_by_id(card.id).await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn delete_with_wrong_owner_leaves_the_card() {
        let store = InMemoryCardStore::new();
        let card = store.insert(test_card(UserId::new())).await.unwrap();

        let deleted = store.delete_owned(card.id, UserId::new()).await.unwrap();

        assert!(deleted.is_none());
        assert!(store.find_by_id(card.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_by_owner_removes_and_returns_the_card() {
        let store = InMemoryCardStore::new();
        let owner = UserId::new();
        let card = store.insert(test_card(owner)).await.unwrap();

        let deleted = store.delete_owned(card.id, owner).await.unwrap().unwrap();

        assert_eq!(deleted.id, card.id);
        assert!(store.find_by_id(card.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn likes_from_different_users_accumulate() {
        let store = InMemoryCardStore::new();
        let card = store.insert(test_card(UserId::new())).await.unwrap();
        let (a, b) = (UserId::new(), UserId::new());

        store.add_like(card.id, a).await.unwrap();
        let after = store.add_like(card.id, b).await.unwrap().unwrap();

        assert_eq!(after.likes.len(), 2);
    }
}
