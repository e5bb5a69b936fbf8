//! Meta-Search Gateway Library
//!
//! This library crate defines the core modules of the gateway. It serves as
//! the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The gateway is composed of four loosely coupled subsystems:
//!
//! - **`ring`**: The consistent-hashing layer. Maps request keys to backend
//!   addresses through weighted virtual nodes, and hot-swaps ring membership
//!   without disturbing in-flight lookups.
//! - **`config`**: The node-list source. Loads backend membership from a JSON
//!   file and publishes change notifications so the ring can be rebuilt
//!   while the process keeps serving.
//! - **`gateway`**: The single-target proxy surface. Resolves one inbound
//!   request to one backend and forwards it verbatim, surfacing upstream
//!   failures as gateway errors.
//! - **`metasearch`**: The scatter-gather orchestrator. Embeds a query via
//!   one ring-selected backend, broadcasts the vectors to the whole fleet,
//!   and merges the ranked partial results.

pub mod config;
pub mod error;
pub mod gateway;
pub mod metasearch;
pub mod ring;
