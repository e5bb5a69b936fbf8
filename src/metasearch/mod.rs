//! Meta-Search Module
//!
//! Drives a single incoming free-text query through a two-phase protocol
//! across the whole backend fleet and returns one merged, ranked hit list.
//!
//! ## Phases
//! 1. **Embed**: the raw query text is routed through the hash ring to one
//!    backend, which computes the embedding vectors. This phase is fatal on
//!    failure: the embedding must be computed exactly once, so there is no
//!    fallback backend.
//! 2. **Scatter**: the vectors are broadcast to every known backend
//!    concurrently. Each call is independent and individually timed out; a
//!    failed or slow backend contributes nothing instead of failing or
//!    stalling the request.
//! 3. **Merge**: all partial hit lists are concatenated, stably sorted by
//!    ascending score (lower L2 distance = better match), and truncated to
//!    the top K.
//!
//! ## Submodules
//! - **`protocol`**: backend endpoint paths and wire DTOs.
//! - **`types`**: partial/merged result types returned to clients.
//! - **`cache`**: bounded, TTL'd cache of query embeddings.
//! - **`orchestrator`**: the phase driver.
//! - **`handlers`**: the HTTP surface for the Axum server.

pub mod cache;
pub mod handlers;
pub mod orchestrator;
pub mod protocol;
pub mod types;
