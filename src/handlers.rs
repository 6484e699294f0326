use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{User, UserPayload};
use crate::state::AppState;

pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;
    let user = state.users.get_by_id(id).await?;

    Ok(Json(user))
}

pub async fn add_user(
    State(state): State<AppState>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = body?;
    let input = payload.validate()?;
    let user = state.users.create(input).await?;

    state.users_created_counter.add(1, &[]);

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn edit_user(
    State(state): State<AppState>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(payload) = body?;
    let input = payload.validate()?;
    let user = state.users.edit(input).await?;

    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.users.delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
