use super::proxy::{forward, route, MAX_BODY_BYTES};
use super::types::{ErrorBody, NodesResponse};
use crate::ring::manager::RingManager;
use axum::body::to_bytes;
use axum::extract::{Query, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ProxyParams {
    pub q: Option<String>,
}

/// Consistent-hash proxying on /api/query.
///
/// The `q` query parameter is the lookup key, so a given query string is
/// always answered by the same backend. An unreachable backend is a 502 for
/// the caller; a gateway with no published ring answers 503.
pub async fn handle_proxy(
    Query(params): Query<ProxyParams>,
    Extension(manager): Extension<Arc<RingManager>>,
    Extension(client): Extension<reqwest::Client>,
    request: Request,
) -> Response {
    let key = params.q.unwrap_or_else(|| "default".to_string());

    let target = match route(&manager, key.as_bytes()) {
        Ok(target) => target,
        Err(e) => {
            tracing::warn!("Cannot route {:?}: {}", key, e);
            return error_response(StatusCode::SERVICE_UNAVAILABLE, &e.to_string());
        }
    };

    tracing::info!("Routing {:?} to {}", key, target);

    let (parts, body) = request.into_parts();
    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to buffer request body: {}", e);
            return error_response(StatusCode::PAYLOAD_TOO_LARGE, "request body too large");
        }
    };

    match forward(&client, &target, parts, body).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Forwarding to {} failed: {}", target, e);
            error_response(StatusCode::BAD_GATEWAY, &e.to_string())
        }
    }
}

/// Snapshot of the published ring for operators, on /nodes.
pub async fn handle_nodes(Extension(manager): Extension<Arc<RingManager>>) -> Response {
    match manager.current() {
        Some(ring) => (
            StatusCode::OK,
            Json(NodesResponse {
                generation: manager.generation(),
                node_count: ring.node_count(),
                vnode_count: ring.vnode_count(),
                nodes: ring.nodes().to_vec(),
            }),
        )
            .into_response(),
        None => error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "no node list has been loaded yet",
        ),
    }
}

pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}
