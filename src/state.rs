//! Shared application state for all routes.

use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Built once by the entry point and shared by every request.
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new<S: Store + 'static>(store: S) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
