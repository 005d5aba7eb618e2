use async_trait::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use mesto_core::{Card, CardId, DomainResult, UserId};

use super::CardStore;
use crate::mongo::map_error;

/// MongoDB-backed card store over the `cards` collection.
pub struct MongoCardStore {
    collection: Collection<Card>,
}

impl MongoCardStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("cards"),
        }
    }

    async fn mutate_likes(&self, id: CardId, update: bson::Document) -> DomainResult<Option<Card>> {
        self.collection
            .find_one_and_update(doc! { "_id": id.as_object_id() }, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_error)
    }
}

#[async_trait]
impl CardStore for MongoCardStore {
    async fn insert(&self, card: Card) -> DomainResult<Card> {
        self.collection.insert_one(&card).await.map_err(map_error)?;
        Ok(card)
    }

    async fn find_all(&self) -> DomainResult<Vec<Card>> {
        let cursor = self.collection.find(doc! {}).await.map_err(map_error)?;
        cursor.try_collect().await.map_err(map_error)
    }

    async fn find_by_id(&self, id: CardId) -> DomainResult<Option<Card>> {
        self.collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await
            .map_err(map_error)
    }

    async fn delete_owned(&self, id: CardId, owner: UserId) -> DomainResult<Option<Card>> {
        self.collection
            .find_one_and_delete(doc! {
                "_id": id.as_object_id(),
                "owner": owner.as_object_id(),
            })
            .await
            .map_err(map_error)
    }

    async fn add_like(&self, id: CardId, user: UserId) -> DomainResult<Option<Card>> {
        self.mutate_likes(id, doc! { "$addToSet": { "likes": user.as_object_id() } })
            .await
    }

    async fn remove_like(&self, id: CardId, user: UserId) -> DomainResult<Option<Card>> {
        self.mutate_likes(id, doc! { "$pull": { "likes": user.as_object_id() } })
            .await
    }
}
