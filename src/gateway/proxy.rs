//! Target resolution and verbatim forwarding.

use crate::error::{GatewayError, Result};
use crate::ring::manager::RingManager;
use axum::body::{Body, Bytes};
use axum::http::header::{CONNECTION, CONTENT_LENGTH, HOST, TRANSFER_ENCODING, UPGRADE};
use axum::http::request::Parts;
use axum::response::Response;
use std::time::Duration;

/// Upper bound on a buffered proxy body.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

const PROXY_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves a lookup key to a backend address via the current ring.
///
/// Fails with `NoBackends` when no ring has ever been published; callers
/// surface that as service-unavailable rather than inventing a target.
pub fn route(manager: &RingManager, key: &[u8]) -> Result<String> {
    let ring = manager.current().ok_or(GatewayError::NoBackends)?;
    Ok(ring.lookup(key).to_string())
}

/// Forwards one request to `target` and propagates the response verbatim.
///
/// The original path and query string are preserved unmodified; only
/// hop-by-hop headers are stripped in both directions. Whatever status the
/// backend answers with, including errors, passes through untouched.
/// Transport failures (connect, timeout) become `Upstream` and are never
/// retried against a different backend.
pub async fn forward(
    client: &reqwest::Client,
    target: &str,
    parts: Parts,
    body: Bytes,
) -> Result<Response> {
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = format!("http://{}{}", target, path_and_query);

    let mut headers = parts.headers.clone();
    for name in [HOST, CONNECTION, TRANSFER_ENCODING, CONTENT_LENGTH, UPGRADE] {
        headers.remove(&name);
    }

    let upstream = client
        .request(parts.method.clone(), &url)
        .headers(headers)
        .body(body)
        .timeout(PROXY_TIMEOUT)
        .send()
        .await
        .map_err(|e| GatewayError::Upstream {
            target: target.to_string(),
            source: e,
        })?;

    let status = upstream.status();
    let upstream_headers = upstream.headers().clone();
    let bytes = upstream.bytes().await.map_err(|e| GatewayError::Upstream {
        target: target.to_string(),
        source: e,
    })?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    for (name, value) in upstream_headers.iter() {
        if name == &CONNECTION || name == &TRANSFER_ENCODING || name == &CONTENT_LENGTH {
            continue;
        }
        response.headers_mut().insert(name, value.clone());
    }

    Ok(response)
}
