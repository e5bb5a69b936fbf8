//! Ownership and hot reload of the published ring.

use super::ring::HashRing;
use super::types::BackendNode;
use crate::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Owns the authoritative current ring.
///
/// Reloads build a replacement ring off to the side and publish it with a
/// single reference swap; `current()` hands out a clone of the published
/// `Arc`, so in-flight lookups keep whichever ring was current when they
/// started and are never pointed at a partially built structure. Old rings
/// are dropped once the last holder releases its reference.
pub struct RingManager {
    current: RwLock<Option<Arc<HashRing>>>,
    generation: AtomicU64,
}

impl RingManager {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// The most recently published ring, or `None` before the first
    /// successful reload.
    pub fn current(&self) -> Option<Arc<HashRing>> {
        self.current.read().expect("ring lock poisoned").clone()
    }

    /// How many rings have been published so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }

    /// Builds a ring from `nodes` and publishes it.
    ///
    /// On a build failure the previous ring stays live and the error is
    /// returned for the caller to log; the manager never crashes the process
    /// over a bad node list.
    pub fn reload(&self, nodes: &[BackendNode]) -> Result<()> {
        let ring = Arc::new(HashRing::build(nodes)?);
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;

        let node_count = ring.node_count();
        let vnode_count = ring.vnode_count();

        let mut slot = self.current.write().expect("ring lock poisoned");
        *slot = Some(ring);
        drop(slot);

        tracing::info!(
            "Published ring generation {} ({} nodes, {} virtual nodes)",
            generation,
            node_count,
            vnode_count
        );

        Ok(())
    }
}

impl Default for RingManager {
    fn default() -> Self {
        Self::new()
    }
}
