//! Response helpers: bare JSON arrays for listings, empty bodies for writes.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}

/// 201 with no body.
pub fn created() -> StatusCode {
    StatusCode::CREATED
}

/// 200 with no body.
pub fn ok_empty() -> StatusCode {
    StatusCode::OK
}
