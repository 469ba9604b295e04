//! HTTP handlers for the users and projects resources.

pub mod projects;
pub mod users;
