//! User handlers: list active, create, update username, soft delete.

use crate::error::AppError;
use crate::models::UsernameBody;
use crate::response::{created, many, ok_empty};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// GET /users — users whose `deleted_at` is null.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = state.store.list_active_users().await?;
    Ok(many(users))
}

/// POST /users — 201, empty body.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let body = UsernameBody::from_json(body)?;
    state.store.create_user(&body.username).await?;
    tracing::info!(username = %body.username, "user created");
    Ok(created())
}

/// PUT|PATCH /users/:id — 200 even when no row matches.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let body = UsernameBody::from_json(body)?;
    let changed = state.store.update_username(&id, &body.username).await?;
    tracing::debug!(id = %id, changed, "user updated");
    Ok(ok_empty())
}

/// DELETE /users/:id — soft delete; 200 even when no row matches.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let changed = state.store.soft_delete_user(&id).await?;
    tracing::debug!(id = %id, changed, "user soft-deleted");
    Ok(ok_empty())
}
