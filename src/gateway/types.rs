use crate::ring::types::BackendNode;
use serde::{Deserialize, Serialize};

/// Body for every non-proxied error response the gateway produces itself.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Snapshot of the published ring for the `/nodes` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct NodesResponse {
    pub generation: u64,
    pub node_count: usize,
    pub vnode_count: usize,
    pub nodes: Vec<BackendNode>,
}
