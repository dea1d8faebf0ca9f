use std::sync::Arc;

use crate::users::store::UserStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Data access layer. A trait object so tests can swap in an in-memory store.
    pub store: Arc<dyn UserStore>,
}
