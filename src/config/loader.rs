//! Node-list file parsing and validation.

use crate::error::{GatewayError, Result};
use crate::ring::types::BackendNode;
use std::path::Path;

/// Reads and validates the node list at `path`.
///
/// The file is a JSON array of node records. An unreadable file, malformed
/// JSON, an empty list, a blank address, or a zero weight are all config
/// errors; callers keep their previous list when this fails.
pub fn load_nodes(path: &Path) -> Result<Vec<BackendNode>> {
    let raw = std::fs::read(path).map_err(|e| {
        GatewayError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;

    parse_nodes(&raw).map_err(|e| {
        GatewayError::Config(format!("{}: {}", path.display(), e))
    })
}

/// Parses and validates a raw node-list document.
pub fn parse_nodes(raw: &[u8]) -> std::result::Result<Vec<BackendNode>, String> {
    let nodes: Vec<BackendNode> =
        serde_json::from_slice(raw).map_err(|e| format!("malformed node list: {}", e))?;

    if nodes.is_empty() {
        return Err("node list is empty".to_string());
    }

    for node in &nodes {
        if node.address.trim().is_empty() {
            return Err("node entry has a blank address".to_string());
        }
        if node.weight == 0 {
            return Err(format!("node {} has weight 0", node.address));
        }
    }

    Ok(nodes)
}
