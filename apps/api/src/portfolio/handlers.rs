use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::portfolio::{Portfolio, Project};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectFilter {
    pub category: Option<String>,
}

/// GET /api/portfolio
pub async fn handle_get_portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}

/// GET /api/portfolio/projects
///
/// `category` filters by the project's category tag; `all` or no filter
/// returns every project, matching the client's tab behavior.
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> Json<Vec<Project>> {
    let projects = match filter.category.as_deref() {
        None | Some("all") => state.portfolio.projects.clone(),
        Some(category) => state
            .portfolio
            .projects
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect(),
    };
    Json(projects)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::contact::store::MemoryContactStore;
    use crate::portfolio::data::default_portfolio;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn test_app() -> Router {
        build_router(AppState {
            store: Arc::new(MemoryContactStore::new()),
            portfolio: Arc::new(default_portfolio()),
        })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_portfolio_returns_the_full_object() {
        let (status, body) = get(test_app(), "/api/portfolio").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["name"], "Daniyal Imran");
        assert_eq!(body["education"].as_array().unwrap().len(), 2);
        assert_eq!(body["projects"].as_array().unwrap().len(), 6);
        assert_eq!(body["contactInfo"]["email"], "daniyalimran602@gmail.com");
    }

    #[tokio::test]
    async fn test_projects_filtered_by_category() {
        let (status, body) = get(test_app(), "/api/portfolio/projects?category=mern").await;
        assert_eq!(status, StatusCode::OK);
        let projects = body.as_array().unwrap();
        assert_eq!(projects.len(), 2);
        assert!(projects.iter().all(|p| p["category"] == "mern"));
    }

    #[tokio::test]
    async fn test_projects_without_filter_returns_everything() {
        let (_, unfiltered) = get(test_app(), "/api/portfolio/projects").await;
        let (_, all_tab) = get(test_app(), "/api/portfolio/projects?category=all").await;
        assert_eq!(unfiltered.as_array().unwrap().len(), 6);
        assert_eq!(unfiltered, all_tab);
    }

    #[tokio::test]
    async fn test_unknown_category_returns_empty_list() {
        let (status, body) = get(test_app(), "/api/portfolio/projects?category=cobol").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 0);
    }
}
