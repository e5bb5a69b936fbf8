//! The embed → scatter → merge phase driver.

use super::cache::EmbeddingCache;
use super::protocol::{
    EmbedRequest, EmbedResponse, ScoredHit, VectorSearchRequest, VectorSearchResponse,
    ENDPOINT_EMBED, ENDPOINT_VECTOR_SEARCH,
};
use super::types::{MetaSearchResponse, PartialResult};
use crate::error::{GatewayError, Result};
use crate::ring::manager::RingManager;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Hits returned to the client after the merge phase.
pub const DEFAULT_TOP_K: usize = 5;

const DEFAULT_EMBED_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_SCATTER_TIMEOUT: Duration = Duration::from_secs(3);
const EMBED_ATTEMPTS: usize = 3;
const CACHE_TTL: Duration = Duration::from_secs(60);
const CACHE_CAPACITY: usize = 1024;

/// Runs the two-phase meta-search protocol against the current ring.
///
/// One instance serves all requests; per-request state lives on the stack of
/// `execute`. Dropping the future mid-scatter (a disconnected client) aborts
/// the in-flight backend calls via the `JoinSet` and discards any partials
/// already collected; a partial response is never sent.
pub struct MetaSearchOrchestrator {
    ring: Arc<RingManager>,
    http_client: reqwest::Client,
    cache: EmbeddingCache,
    top_k: usize,
    embed_timeout: Duration,
    scatter_timeout: Duration,
}

impl MetaSearchOrchestrator {
    pub fn new(ring: Arc<RingManager>, http_client: reqwest::Client) -> Self {
        Self {
            ring,
            http_client,
            cache: EmbeddingCache::new(CACHE_TTL, CACHE_CAPACITY),
            top_k: DEFAULT_TOP_K,
            embed_timeout: DEFAULT_EMBED_TIMEOUT,
            scatter_timeout: DEFAULT_SCATTER_TIMEOUT,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_timeouts(mut self, embed: Duration, scatter: Duration) -> Self {
        self.embed_timeout = embed;
        self.scatter_timeout = scatter;
        self
    }

    /// Drives one query through embed, scatter and merge.
    ///
    /// Returns `NoBackends` before the first ring publication and `Embed`
    /// when phase one fails; scatter-phase failures degrade the response
    /// instead of erroring.
    pub async fn execute(&self, query: &str) -> Result<MetaSearchResponse> {
        let request_id = uuid::Uuid::new_v4();
        let ring = self.ring.current().ok_or(GatewayError::NoBackends)?;

        let vectors = match self.cache.get(query) {
            Some(vectors) => {
                tracing::debug!("[{}] Embedding cache hit", request_id);
                vectors
            }
            None => {
                let target = ring.lookup(query.as_bytes());
                tracing::info!("[{}] Embed phase routed to {}", request_id, target);
                let vectors = self.fetch_embedding(target, query).await?;
                self.cache.insert(query, vectors.clone());
                vectors
            }
        };

        let request = VectorSearchRequest { vectors };
        let mut calls = JoinSet::new();
        for node in ring.nodes() {
            calls.spawn(search_backend(
                self.http_client.clone(),
                node.address.clone(),
                request.clone(),
                self.scatter_timeout,
            ));
        }

        let mut partials: Vec<PartialResult> = Vec::with_capacity(ring.node_count());
        while let Some(joined) = calls.join_next().await {
            match joined {
                Ok(partial) => {
                    if let Some(error) = &partial.error {
                        tracing::warn!(
                            "[{}] Backend {} contributed no hits: {}",
                            request_id,
                            partial.source,
                            error
                        );
                    }
                    partials.push(partial);
                }
                Err(e) => {
                    tracing::error!("[{}] Scatter task failed to join: {}", request_id, e);
                }
            }
        }

        let contributing = partials.iter().filter(|p| p.error.is_none()).count();
        let failed = partials.len() - contributing;
        let hits = merge_hits(partials, self.top_k);

        tracing::info!(
            "[{}] Merged {} hits from {} backends ({} failed)",
            request_id,
            hits.len(),
            contributing,
            failed
        );

        Ok(MetaSearchResponse {
            status: if failed == 0 { "ok" } else { "degraded" }.to_string(),
            query: query.to_string(),
            contributing,
            failed,
            hits,
            error: None,
        })
    }

    /// Fetches embeddings from the ring-selected backend.
    ///
    /// Transport failures are retried with backoff against the same target
    /// only: the key maps to exactly this backend, and computing phase one
    /// anywhere else would break routing consistency. A non-2xx status or a
    /// malformed body is not retried.
    async fn fetch_embedding(&self, target: &str, query: &str) -> Result<Vec<Vec<f32>>> {
        let url = format!("http://{}{}", target, ENDPOINT_EMBED);
        let payload = EmbedRequest {
            text: query.to_string(),
        };
        let mut delay_ms = 150u64;

        for attempt in 0..EMBED_ATTEMPTS {
            let response = self
                .http_client
                .post(&url)
                .json(&payload)
                .timeout(self.embed_timeout)
                .send()
                .await;

            match response {
                Ok(resp) => {
                    if !resp.status().is_success() {
                        return Err(GatewayError::Embed(format!(
                            "{} returned status {}",
                            target,
                            resp.status()
                        )));
                    }

                    let body: EmbedResponse = resp.json().await.map_err(|e| {
                        GatewayError::Embed(format!(
                            "{} returned a malformed embedding response: {}",
                            target, e
                        ))
                    })?;

                    if body.vectors.is_empty() || body.vectors.iter().any(|v| v.is_empty()) {
                        return Err(GatewayError::Embed(format!(
                            "{} returned empty embedding vectors",
                            target
                        )));
                    }

                    return Ok(body.vectors);
                }
                Err(e) => {
                    if attempt + 1 == EMBED_ATTEMPTS {
                        return Err(GatewayError::Embed(format!("{}: {}", target, e)));
                    }
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }

        Err(GatewayError::Embed(format!(
            "{}: retry attempts exhausted",
            target
        )))
    }
}

/// One scatter-phase call. Never fails the request: every outcome folds into
/// a `PartialResult`, with errors captured as an empty contribution.
async fn search_backend(
    client: reqwest::Client,
    address: String,
    request: VectorSearchRequest,
    timeout: Duration,
) -> PartialResult {
    let url = format!("http://{}{}", address, ENDPOINT_VECTOR_SEARCH);

    let response = client
        .post(&url)
        .json(&request)
        .timeout(timeout)
        .send()
        .await;

    match response {
        Ok(resp) if resp.status().is_success() => match resp.json::<VectorSearchResponse>().await {
            Ok(body) => PartialResult::ok(address, body.hits),
            Err(e) => PartialResult::failed(address, format!("malformed response: {}", e)),
        },
        Ok(resp) => PartialResult::failed(address, format!("status {}", resp.status())),
        Err(e) => PartialResult::failed(address, e.to_string()),
    }
}

/// Concatenates partial hit lists, sorts ascending by score and truncates.
///
/// The sort is stable, so hits with equal scores keep their encounter order;
/// the protocol defines no secondary key.
pub fn merge_hits(partials: Vec<PartialResult>, top_k: usize) -> Vec<ScoredHit> {
    let mut hits: Vec<ScoredHit> = partials.into_iter().flat_map(|p| p.hits).collect();

    hits.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    hits.truncate(top_k);
    hits
}
