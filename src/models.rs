//! Row types and request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Null while active; set when soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /users` and `PUT|PATCH /users/:id`.
#[derive(Clone, Debug, Deserialize)]
pub struct UsernameBody {
    pub username: String,
}

impl UsernameBody {
    /// Presence check only: the body must be an object carrying a string `username`.
    pub fn from_json(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Object(_) => {}
            _ => return Err(AppError::BadRequest("body must be a JSON object".into())),
        }
        serde_json::from_value(value)
            .map_err(|_| AppError::BadRequest("'username' is required and must be a string".into()))
    }
}
