use super::orchestrator::MetaSearchOrchestrator;
use super::types::MetaSearchResponse;
use crate::error::GatewayError;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct MetaSearchParams {
    pub query: Option<String>,
}

/// GET /search?query=... is the meta-search surface.
///
/// A degraded fleet still answers 200; only a missing query, an unpublished
/// ring, or an embed-phase failure surface as errors.
pub async fn handle_meta_search(
    Query(params): Query<MetaSearchParams>,
    Extension(orchestrator): Extension<Arc<MetaSearchOrchestrator>>,
) -> (StatusCode, Json<MetaSearchResponse>) {
    let query = params.query.unwrap_or_default();
    if query.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(failure("missing_query", "", "query parameter is required")),
        );
    }

    match orchestrator.execute(&query).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e @ GatewayError::NoBackends) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(failure("unavailable", &query, &e.to_string())),
        ),
        Err(e) => {
            tracing::error!("Meta-search for {:?} failed: {}", query, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(failure("embedding_failed", &query, &e.to_string())),
            )
        }
    }
}

fn failure(status: &str, query: &str, error: &str) -> MetaSearchResponse {
    MetaSearchResponse {
        status: status.to_string(),
        query: query.to_string(),
        contributing: 0,
        failed: 0,
        hits: Vec::new(),
        error: Some(error.to_string()),
    }
}
