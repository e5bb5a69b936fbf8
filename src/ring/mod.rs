//! Consistent Hash Ring Module
//!
//! Maps request keys to backend addresses so that the same key always lands on
//! the same backend, and membership changes only remap the minimal subset of
//! keys (the ones adjacent to the added or removed virtual nodes).
//!
//! ## Core Concepts
//! - **Identity hashing**: keys and virtual-node labels share one 256-bit
//!   identifier space, so ring placement is reproducible across restarts.
//! - **Virtual nodes**: each backend owns `weight` positions on the ring
//!   (labels `"<address>#<index>"`), smoothing load across the key space.
//! - **Clockwise successor**: a key resolves to the owner of the next virtual
//!   node at or after its position, wrapping past the top of the key space.
//! - **Immutable rings**: a ring is never patched in place. Reloads build a
//!   fresh ring and publish it with a single reference swap, so in-flight
//!   lookups keep a consistent view.
//!
//! ## Submodules
//! - **`hasher`**: fixed-width identifier type and the digest function.
//! - **`types`**: backend node descriptor shared with the config layer.
//! - **`ring`**: the sorted virtual-node structure and successor lookup.
//! - **`manager`**: owns the published ring and applies hot reloads.

pub mod hasher;
pub mod manager;
pub mod ring;
pub mod types;
