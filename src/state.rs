use std::sync::Arc;

use opentelemetry::{global, metrics::Counter};

use crate::service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub users_created_counter: Counter<u64>,
}

impl AppState {
    /// Instruments come from the global meter provider, so install it first.
    pub fn new(users: UserService) -> Self {
        let users_created_counter = global::meter("user-api")
            .u64_counter("users_created")
            .with_description("Number of users created")
            .build();

        Self {
            users: Arc::new(users),
            users_created_counter,
        }
    }
}
