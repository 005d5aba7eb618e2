use async_trait::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use mesto_core::{DomainError, DomainResult, User, UserId};

use super::UserStore;
use crate::mongo::{is_duplicate_key, map_error};

/// MongoDB-backed user store over the `users` collection.
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    async fn update_one(&self, id: UserId, set: Document) -> DomainResult<Option<User>> {
        if set.is_empty() {
            return self.find_by_id(id).await;
        }
        self.collection
            .find_one_and_update(doc! { "_id": id.as_object_id() }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_error)
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, user: User) -> DomainResult<User> {
        self.collection.insert_one(&user).await.map_err(|err| {
            if is_duplicate_key(&err) {
                DomainError::conflict("Пользователь с такой почтой уже зарегистрирован")
            } else {
                map_error(err)
            }
        })?;
        Ok(user)
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await.map_err(map_error)?;
        cursor.try_collect().await.map_err(map_error)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await
            .map_err(map_error)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(map_error)
    }

    async fn update_profile(
        &self,
        id: UserId,
        name: Option<String>,
        about: Option<String>,
    ) -> DomainResult<Option<User>> {
        let mut set = Document::new();
        if let Some(name) = name {
            set.insert("name", name);
        }
        if let Some(about) = about {
            set.insert("about", about);
        }
        self.update_one(id, set).await
    }

    async fn update_avatar(&self, id: UserId, avatar: String) -> DomainResult<Option<User>> {
        self.update_one(id, doc! { "avatar": avatar }).await
    }
}
