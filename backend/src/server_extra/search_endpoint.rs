use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use common::filter_criteria::FilterCriteria;
use tracing::info;

use crate::api::search::SchemeSearchService;

pub const SEARCH_ENDPOINT_PATH: &str = "/_api/schemes/search";

/// JSON search route for clients other than the web UI.
pub fn search_routes(service: Arc<SchemeSearchService>) -> Router {
    Router::new()
        .route(SEARCH_ENDPOINT_PATH, post(search_schemes_json))
        .with_state(service)
}

pub async fn search_schemes_json(
    State(service): State<Arc<SchemeSearchService>>,
    Json(criteria): Json<FilterCriteria>,
) -> impl IntoResponse {
    info!("JSON search request");
    match service.search(&criteria).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => (StatusCode::BAD_GATEWAY, Json(e)).into_response(),
    }
}
