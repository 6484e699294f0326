use axum::{
    Router,
    routing::{get, post},
};
use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};

use crate::handlers::{add_user, delete_user, edit_user, get_user};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/users/{id}", get(get_user).delete(delete_user))
        .route("/api/v1/users", post(add_user).put(edit_user))
        .layer(OtelInResponseLayer::default())
        .layer(OtelAxumLayer::default())
        .with_state(state)
}
