//! Business rules around the user entity.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::converter::UserConverter;
use crate::models::{User, UserInput};
use crate::store::{StoreError, UserStore};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("User with email {email} already exists")]
    AlreadyExists { email: String },

    #[error("User with id {} not found", describe_id(.id))]
    NotFound { id: Option<Uuid> },

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn describe_id(id: &Option<Uuid>) -> String {
    id.map_or_else(|| "<none>".to_string(), |id| id.to_string())
}

pub struct UserService {
    store: Arc<dyn UserStore>,
    converter: UserConverter,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, converter: UserConverter) -> Self {
        Self { store, converter }
    }

    /// Persists a new user. Any id on the input is discarded; the store
    /// assigns a fresh one.
    #[instrument(skip_all, fields(email = %input.email))]
    pub async fn create(&self, input: UserInput) -> Result<User, ServiceError> {
        if self.store.exists_by_email(&input.email).await? {
            warn!("Rejected create: email already in use");
            return Err(ServiceError::AlreadyExists { email: input.email });
        }

        let user = User {
            id: None,
            ..self.converter.convert(input)
        };
        let saved = self.save(user).await?;

        info!(user_id = ?saved.id, "User created");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<User, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound { id: Some(id) })
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError> {
        let user = self.get_by_id(id).await?;
        self.store.delete(&user).await?;

        info!("User deleted");
        Ok(())
    }

    /// Replaces every mutable field of an existing user. Email uniqueness is
    /// only checked when the email changes.
    #[instrument(skip_all, fields(user_id = ?input.id))]
    pub async fn edit(&self, input: UserInput) -> Result<User, ServiceError> {
        let Some(id) = input.id else {
            warn!("Rejected edit: no id supplied");
            return Err(ServiceError::NotFound { id: None });
        };

        let existing = self.get_by_id(id).await?;

        if existing.email != input.email && self.store.exists_by_email(&input.email).await? {
            warn!("Rejected edit: email already in use");
            return Err(ServiceError::AlreadyExists { email: input.email });
        }

        let saved = self.save(self.converter.convert(input)).await?;

        info!("User updated");
        Ok(saved)
    }

    // A unique violation here means another request took the email between
    // our check and the write.
    async fn save(&self, user: User) -> Result<User, ServiceError> {
        let email = user.email.clone();
        self.store.save(user).await.map_err(|err| match err {
            StoreError::DuplicateEmail => ServiceError::AlreadyExists { email },
            other => ServiceError::Store(other),
        })
    }
}
