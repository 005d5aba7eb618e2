use std::sync::RwLock;

use async_trait::async_trait;

use mesto_core::{DomainError, DomainResult, User, UserId};

use super::UserStore;

/// In-memory user store.
///
/// Intended for tests/dev. All mutations happen under one lock, which gives
/// the same no-lost-update guarantee the atomic document updates give the
/// MongoDB implementation.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(_: impl Sized) -> DomainError {
    DomainError::internal("user store lock poisoned")
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::conflict(
                "Пользователь с такой почтой уже зарегистрирован",
            ));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.read().map_err(poisoned)?.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn update_profile(
        &self,
        id: UserId,
        name: Option<String>,
        about: Option<String>,
    ) -> DomainResult<Option<User>> {
        let mut users = self.users.write().map_err(poisoned)?;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(about) = about {
            user.about = about;
        }
        Ok(Some(user.clone()))
    }

    async fn update_avatar(&self, id: UserId, avatar: String) -> DomainResult<Option<User>> {
        let mut users = self.users.write().map_err(poisoned)?;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        user.avatar = avatar;
        Ok(Some(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(email: &str) -> User {
        User::new(email.to_string(), "hash".to_string(), None, None, None)
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict_and_adds_no_record() {
        let store = InMemoryUserStore::new();
        store.insert(test_user("a@example.com")).await.unwrap();

        let err = store.insert(test_user("a@example.com")).await.unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            other => panic!("expected Conflict, got {other:?}"),
        }
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_by_email_returns_the_password_hash() {
        let store = InMemoryUserStore::new();
        store.insert(test_user("a@example.com")).await.unwrap();

        let user = store.find_by_email("a@example.com").await.unwrap().unwrap();
        assert_eq!(user.password, "hash");
    }

    #[tokio::test]
    async fn update_profile_touches_only_provided_fields() {
        let store = InMemoryUserStore::new();
        let user = store.insert(test_user("a@example.com")).await.unwrap();

        let updated = store
            .update_profile(user.id, Some("Мария".to_string()), None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Мария");
        assert_eq!(updated.about, user.about);
    }

    #[tokio::test]
    async fn update_of_missing_user_is_none() {
        let store = InMemoryUserStore::new();
        let result = store
            .update_avatar(UserId::new(), "https://example.com/a.png".to_string())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
