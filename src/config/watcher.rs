//! Polling watcher that turns file edits into node-list notifications.

use super::loader::parse_nodes;
use crate::ring::hasher::{hash_bytes, HashId};
use crate::ring::types::BackendNode;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::watch;

/// Watches a node-list file and publishes parsed snapshots on change.
///
/// The loop re-reads the file every `interval` and only parses when the raw
/// content digest differs from the last one it saw, so touching the file
/// without changing it stays quiet. A read or parse failure is logged and the
/// previous snapshot stays published; the watcher never tears down a working
/// configuration over a bad intermediate write.
pub struct NodeListWatcher {
    path: PathBuf,
    interval: Duration,
}

impl NodeListWatcher {
    pub fn new(path: impl Into<PathBuf>, interval: Duration) -> Self {
        Self {
            path: path.into(),
            interval,
        }
    }

    /// Spawns the poll loop and returns the receiving side of the channel.
    ///
    /// `initial` seeds the channel so subscribers always have a value to
    /// borrow; only subsequent content changes fire `changed()`. The loop
    /// exits when every receiver is gone.
    pub fn spawn(self, initial: Vec<BackendNode>) -> watch::Receiver<Vec<BackendNode>> {
        let (tx, rx) = watch::channel(initial);

        // Snapshot the digest before the loop starts, so an edit racing the
        // spawn still counts as a change on the first tick.
        let mut last_digest: Option<HashId> = std::fs::read(&self.path)
            .ok()
            .map(|raw| hash_bytes(&raw));

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);

            loop {
                ticker.tick().await;

                let raw = match std::fs::read(&self.path) {
                    Ok(raw) => raw,
                    Err(e) => {
                        tracing::warn!(
                            "Failed to read node list {}: {}",
                            self.path.display(),
                            e
                        );
                        continue;
                    }
                };

                let digest = hash_bytes(&raw);
                if last_digest == Some(digest) {
                    continue;
                }
                last_digest = Some(digest);

                match parse_nodes(&raw) {
                    Ok(nodes) => {
                        tracing::info!(
                            "Node list {} changed ({} nodes)",
                            self.path.display(),
                            nodes.len()
                        );
                        if tx.send(nodes).is_err() {
                            tracing::debug!("All node list subscribers dropped, stopping watcher");
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Ignoring unusable node list {}: {}",
                            self.path.display(),
                            e
                        );
                    }
                }
            }
        });

        rx
    }
}
