//! In-memory `Store` and request helpers shared by router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use resource_api::{app, AppError, AppState, Project, Store, User};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
pub struct MemoryStore {
    pub users: Mutex<Vec<User>>,
    pub projects: Mutex<Vec<Project>>,
    pub offline: bool,
}

fn parse_id(id: &str) -> Result<i64, AppError> {
    id.parse()
        .map_err(|_| AppError::Db(sqlx::Error::Protocol(format!("invalid input syntax for type bigint: \"{}\"", id))))
}

impl MemoryStore {
    fn check_online(&self) -> Result<(), AppError> {
        if self.offline {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }

    pub fn with_projects(titles: &[&str]) -> Self {
        let now = Utc::now();
        let projects = titles
            .iter()
            .enumerate()
            .map(|(i, t)| Project {
                id: i as i64 + 1,
                title: t.to_string(),
                user_id: None,
                created_at: now,
                updated_at: now,
            })
            .collect();
        MemoryStore {
            projects: Mutex::new(projects),
            ..MemoryStore::default()
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.check_online()
    }

    async fn list_active_users(&self) -> Result<Vec<User>, AppError> {
        self.check_online()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().filter(|u| !u.is_deleted()).cloned().collect())
    }

    async fn create_user(&self, username: &str) -> Result<(), AppError> {
        self.check_online()?;
        let mut users = self.users.lock().unwrap();
        let now = Utc::now();
        let id = users.len() as i64 + 1;
        users.push(User {
            id,
            username: username.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        });
        Ok(())
    }

    async fn update_username(&self, id: &str, username: &str) -> Result<u64, AppError> {
        self.check_online()?;
        let id = parse_id(id)?;
        let mut users = self.users.lock().unwrap();
        let mut changed = 0;
        for u in users.iter_mut().filter(|u| u.id == id) {
            u.username = username.to_string();
            u.updated_at = Utc::now();
            changed += 1;
        }
        Ok(changed)
    }

    async fn soft_delete_user(&self, id: &str) -> Result<u64, AppError> {
        self.check_online()?;
        let id = parse_id(id)?;
        let mut users = self.users.lock().unwrap();
        let mut changed = 0;
        for u in users.iter_mut().filter(|u| u.id == id) {
            u.deleted_at = Some(Utc::now());
            changed += 1;
        }
        Ok(changed)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.check_online()?;
        Ok(self.projects.lock().unwrap().clone())
    }
}

pub fn router(store: Arc<MemoryStore>) -> Router {
    app(AppState { store })
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            builder = builder.header("content-type", "application/json");
            Body::from(b.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn send_json(app: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, method, uri, None).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}
