use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, UserStore};
use crate::models::User;

/// Process-local store. Email uniqueness is checked under the write lock,
/// matching the unique constraint of the Postgres schema.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        let id = user.id.unwrap_or_else(Uuid::new_v4);

        let email_taken = users
            .values()
            .any(|u| u.email == user.email && u.id != Some(id));
        if email_taken {
            return Err(StoreError::DuplicateEmail);
        }

        let saved = User {
            id: Some(id),
            ..user
        };
        users.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, user: &User) -> Result<(), StoreError> {
        if let Some(id) = user.id {
            self.users.write().await.remove(&id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> User {
        User {
            id: None,
            first_name: "FirstName".to_string(),
            last_name: "LastName".to_string(),
            email: email.to_string(),
            password: "Password1#".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_id() {
        let store = InMemoryUserStore::new();

        let saved = store.save(new_user("email@domain.com")).await.unwrap();

        let id = saved.id.expect("id assigned");
        let found = store.find_by_id(id).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn test_save_assigns_distinct_ids() {
        let store = InMemoryUserStore::new();

        let first = store.save(new_user("one@domain.com")).await.unwrap();
        let second = store.save(new_user("two@domain.com")).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_exists_by_email() {
        let store = InMemoryUserStore::new();
        store.save(new_user("email@domain.com")).await.unwrap();

        assert!(store.exists_by_email("email@domain.com").await.unwrap());
        assert!(!store.exists_by_email("other@domain.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_with_id_replaces() {
        let store = InMemoryUserStore::new();
        let saved = store.save(new_user("email@domain.com")).await.unwrap();

        let replaced = store
            .save(User {
                first_name: "Changed".to_string(),
                ..saved.clone()
            })
            .await
            .unwrap();

        assert_eq!(replaced.id, saved.id);
        let found = store.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.first_name, "Changed");
    }

    #[tokio::test]
    async fn test_save_rejects_email_of_other_user() {
        let store = InMemoryUserStore::new();
        store.save(new_user("email@domain.com")).await.unwrap();

        let result = store.save(new_user("email@domain.com")).await;

        assert!(matches!(result, Err(StoreError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryUserStore::new();
        let saved = store.save(new_user("email@domain.com")).await.unwrap();

        store.delete(&saved).await.unwrap();

        assert_eq!(store.find_by_id(saved.id.unwrap()).await.unwrap(), None);
        assert!(!store.exists_by_email("email@domain.com").await.unwrap());
    }
}
