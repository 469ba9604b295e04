//! Project handlers.

use crate::error::AppError;
use crate::response::many;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// GET /projects — every row, no filter.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let projects = state.store.list_projects().await?;
    Ok(many(projects))
}
