//! Node Configuration Module
//!
//! Loads the backend node list and notifies the rest of the gateway when it
//! changes on disk.
//!
//! ## Core Concepts
//! - **Node list file**: a JSON array of `{ "address": "host:port", "weight": N }`
//!   records; `weight` defaults to 100 when omitted.
//! - **Change notification**: a polling watcher re-reads the file, compares a
//!   digest of the raw bytes, and publishes freshly parsed node lists on a
//!   `tokio::sync::watch` channel. Subscribers (the ring manager wiring in
//!   `main`) only ever see complete, validated lists, which keeps the
//!   detection mechanism out of the ring-rebuild logic.
//! - **Bad writes are non-fatal**: a malformed or empty file during a reload
//!   is logged and skipped; the previously published list stays current.
//!
//! ## Submodules
//! - **`loader`**: file parsing and validation.
//! - **`watcher`**: the polling loop and the notification channel.

pub mod loader;
pub mod watcher;

#[cfg(test)]
mod tests;
