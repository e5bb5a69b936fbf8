//! Backend Wire Protocol
//!
//! Defines the endpoint paths and Data Transfer Objects the gateway uses to
//! talk to backend search nodes during the two meta-search phases.
//!
//! These structures are serialized as JSON over HTTP. The backends own the
//! semantics (embedding computation, vector similarity search); the gateway
//! only depends on the shapes below.

use serde::{Deserialize, Serialize};

// --- Backend endpoints ---

/// Embedding endpoint, consumed during the embed phase.
pub const ENDPOINT_EMBED: &str = "/embed";
/// Similarity-search endpoint, consumed during the scatter phase.
pub const ENDPOINT_VECTOR_SEARCH: &str = "/vectorSearch";

// --- Data Transfer Objects ---

/// Request for the embedding endpoint: raw query text in, vectors out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedRequest {
    pub text: String,
}

/// One or more fixed-dimension vectors for a single query.
///
/// Backends that embed a query under multiple representations (separate
/// title/abstract and fulltext vectors, for instance) return them all; the
/// scatter phase forwards the full set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedResponse {
    pub vectors: Vec<Vec<f32>>,
}

/// Request for the similarity-search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorSearchRequest {
    pub vectors: Vec<Vec<f32>>,
}

/// Ordered hits from one backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorSearchResponse {
    pub hits: Vec<ScoredHit>,
}

/// A single scored hit.
///
/// `score` is an L2 distance; lower means more similar. The payload is an
/// opaque record (document metadata) that the gateway never inspects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredHit {
    pub score: f32,
    pub payload: serde_json::Value,
}
