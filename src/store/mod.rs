//! Persistence contract for users and its implementations.

mod memory;
mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::User;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email is already used by another user")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage for [`User`] entities keyed by id.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Inserts the user, assigning a fresh id when it has none, or replaces
    /// the stored user with the same id.
    async fn save(&self, user: User) -> Result<User, StoreError>;

    async fn delete(&self, user: &User) -> Result<(), StoreError>;
}
