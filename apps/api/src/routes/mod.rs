pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio content (read-only)
        .route("/api/portfolio", get(portfolio::handle_get_portfolio))
        .route("/api/portfolio/projects", get(portfolio::handle_list_projects))
        // Contact messages
        .route(
            "/api/contact",
            post(contact::handle_submit).get(contact::handle_list),
        )
        .route("/api/contact/:id", get(contact::handle_get_by_id))
        .with_state(state)
}
