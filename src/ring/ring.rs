//! The sorted virtual-node structure and successor lookup.

use super::hasher::{hash_bytes, hash_str, HashId};
use super::types::BackendNode;
use crate::error::{GatewayError, Result};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// An immutable snapshot of ring membership.
///
/// Holds every virtual node in sorted order (the `BTreeMap` key order is the
/// numeric ring order) plus the backend list the ring was built from. Lookups
/// never mutate the ring, so a published `Arc<HashRing>` is safe to share
/// across any number of concurrent callers.
pub struct HashRing {
    /// Virtual-node position -> index into `nodes`.
    vnodes: BTreeMap<HashId, usize>,
    nodes: Vec<BackendNode>,
}

impl HashRing {
    /// Builds a ring from a node list.
    ///
    /// Each node contributes `weight` virtual nodes, hashed from the labels
    /// `"<address>#<index>"`. Fails with a config error on an empty node
    /// list, a zero weight, or a hash collision between two virtual-node
    /// labels; in every case the caller keeps whatever ring was live before.
    pub fn build(nodes: &[BackendNode]) -> Result<Self> {
        if nodes.is_empty() {
            return Err(GatewayError::Config(
                "node list is empty, refusing to build a ring".to_string(),
            ));
        }

        let mut vnodes = BTreeMap::new();
        for (index, node) in nodes.iter().enumerate() {
            if node.weight == 0 {
                return Err(GatewayError::Config(format!(
                    "node {} has weight 0",
                    node.address
                )));
            }

            for replica in 0..node.weight {
                let label = format!("{}#{}", node.address, replica);
                let id = hash_str(&label);
                if vnodes.insert(id, index).is_some() {
                    return Err(GatewayError::Config(format!(
                        "virtual node hash collision on label {}",
                        label
                    )));
                }
            }
        }

        Ok(Self {
            vnodes,
            nodes: nodes.to_vec(),
        })
    }

    /// Resolves a lookup key to the address owning it.
    ///
    /// Deterministic: the same key on the same ring always returns the same
    /// address, any number of times.
    pub fn lookup(&self, key: &[u8]) -> &str {
        self.lookup_id(hash_bytes(key))
    }

    /// Resolves an already-hashed identifier to its owning address.
    ///
    /// A key that lands exactly on a virtual node is coincident with it and
    /// resolves to that node's owner; the equality check runs before the
    /// strictly-greater successor scan. Otherwise the owner is the smallest
    /// virtual node above the key, wrapping to the first virtual node when
    /// the key is past the top of the ring.
    pub fn lookup_id(&self, key: HashId) -> &str {
        if let Some(index) = self.vnodes.get(&key) {
            return &self.nodes[*index].address;
        }

        let successor = self
            .vnodes
            .range((Excluded(key), Unbounded))
            .next()
            .or_else(|| self.vnodes.iter().next());

        match successor {
            Some((_, index)) => &self.nodes[*index].address,
            None => unreachable!("build() rejects empty node lists"),
        }
    }

    /// The full membership list this ring was built from.
    pub fn nodes(&self) -> &[BackendNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total virtual nodes on the ring (the sum of node weights).
    pub fn vnode_count(&self) -> usize {
        self.vnodes.len()
    }
}
