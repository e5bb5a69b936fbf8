use serde::{Deserialize, Serialize};

/// Virtual-node multiplicity used when a node entry does not specify one.
pub const DEFAULT_WEIGHT: u32 = 100;

/// A single backend search node as described by the node-list configuration.
///
/// `address` is the `host:port` the gateway dials; it uniquely identifies the
/// backend. `weight` controls how many virtual nodes the backend owns on the
/// ring. Instances are immutable once a ring is built from them; a reload
/// supersedes them with freshly parsed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendNode {
    pub address: String,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

impl BackendNode {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            weight: DEFAULT_WEIGHT,
        }
    }

    pub fn with_weight(address: impl Into<String>, weight: u32) -> Self {
        Self {
            address: address.into(),
            weight,
        }
    }
}

fn default_weight() -> u32 {
    DEFAULT_WEIGHT
}
