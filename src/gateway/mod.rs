//! Gateway Module
//!
//! The single-target proxy surface: resolves one inbound request to one
//! backend via the hash ring and forwards it verbatim.
//!
//! ## Core Mechanisms
//! - **Routing**: the lookup key for `/api/query` is the `q` query parameter,
//!   so identical queries always land on the same backend.
//! - **Forwarding**: method, headers and body pass through unmodified, and
//!   the original path and query string are preserved, so the backend sees
//!   the request the client sent.
//! - **Failure policy**: an unreachable backend is a gateway failure (502)
//!   for the client. The request is never retried against a different
//!   backend; consistent hashing means the key maps to exactly one node, and
//!   answering from another would break that contract.
//!
//! ## Submodules
//! - **`proxy`**: target resolution and the forwarding client.
//! - **`handlers`**: HTTP handlers and observability endpoints.
//! - **`types`**: response DTOs.

pub mod handlers;
pub mod proxy;
pub mod types;
