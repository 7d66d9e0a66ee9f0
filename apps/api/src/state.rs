use std::sync::Arc;

use crate::contact::store::ContactStore;
use crate::models::portfolio::Portfolio;

/// Shared application state injected into all route handlers via axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable message store. Postgres when `DATABASE_URL` is set,
    /// in-memory otherwise; tests construct isolated in-memory instances.
    pub store: Arc<dyn ContactStore>,
    /// Immutable portfolio content, built once at startup.
    pub portfolio: Arc<Portfolio>,
}
