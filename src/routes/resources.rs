//! Resource routes: users and projects.

use crate::handlers::{projects, users};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/:id",
            axum::routing::put(users::update)
                .patch(users::update)
                .delete(users::delete),
        )
        .route("/projects", get(projects::list))
        .with_state(state)
}
