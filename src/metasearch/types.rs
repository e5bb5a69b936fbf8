use super::protocol::ScoredHit;
use serde::{Deserialize, Serialize};

/// What one backend contributed to a scatter round.
///
/// A present `error` means the backend contributed zero hits; it never fails
/// the aggregate request.
#[derive(Debug, Clone)]
pub struct PartialResult {
    pub source: String,
    pub hits: Vec<ScoredHit>,
    pub error: Option<String>,
}

impl PartialResult {
    pub fn ok(source: impl Into<String>, hits: Vec<ScoredHit>) -> Self {
        Self {
            source: source.into(),
            hits,
            error: None,
        }
    }

    pub fn failed(source: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            hits: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// The merged response returned to the client.
///
/// `status` is `"ok"` when every backend contributed and `"degraded"` when
/// some failed; a degraded fleet still answers with 200 and whatever hits the
/// healthy backends produced.
#[derive(Debug, Serialize, Deserialize)]
pub struct MetaSearchResponse {
    pub status: String,
    pub query: String,
    pub contributing: usize,
    pub failed: usize,
    pub hits: Vec<ScoredHit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
