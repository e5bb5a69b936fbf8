//! Bounded cache of query embeddings.

use dashmap::DashMap;
use std::time::{Duration, Instant};

struct CachedEmbedding {
    vectors: Vec<Vec<f32>>,
    cached_at: Instant,
}

/// TTL'd, capacity-bounded cache keyed by raw query text.
///
/// Owned by the orchestrator; there is no process-wide lookup table.
/// Entries expire after `ttl`. When the map is full, expired entries are
/// swept and, if that frees nothing, the whole map is cleared rather than
/// letting it grow without bound.
pub struct EmbeddingCache {
    entries: DashMap<String, CachedEmbedding>,
    ttl: Duration,
    capacity: usize,
}

impl EmbeddingCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            capacity,
        }
    }

    pub fn get(&self, query: &str) -> Option<Vec<Vec<f32>>> {
        let expired = match self.entries.get(query) {
            Some(entry) => {
                if entry.cached_at.elapsed() < self.ttl {
                    return Some(entry.vectors.clone());
                }
                true
            }
            None => false,
        };

        if expired {
            self.entries.remove(query);
        }
        None
    }

    pub fn insert(&self, query: &str, vectors: Vec<Vec<f32>>) {
        if self.entries.len() >= self.capacity {
            let ttl = self.ttl;
            self.entries.retain(|_, entry| entry.cached_at.elapsed() < ttl);

            if self.entries.len() >= self.capacity {
                self.entries.clear();
            }
        }

        self.entries.insert(
            query.to_string(),
            CachedEmbedding {
                vectors,
                cached_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
