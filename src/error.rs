//! Error taxonomy for the gateway.
//!
//! Every fallible gateway operation narrows down to one of four failure
//! classes, and the class decides both propagation and the HTTP status the
//! caller sees:
//!
//! - `Config`: the node list (or a ring built from it) is unusable. A failed
//!   reload keeps the previous ring live; only the very first load at startup
//!   is allowed to abort the process.
//! - `NoBackends`: a lookup was attempted before any ring was ever published.
//!   Surfaced as 503, never as a null target.
//! - `Upstream`: a single backend call failed at the transport level. Fatal
//!   (502) for single-target proxying; absorbed into an empty contribution
//!   during the scatter phase.
//! - `Embed`: phase one of a meta-search failed. Fatal to that request,
//!   since partial results are meaningless without an embedding.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Bad or empty node list; ring build refused.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// No ring has ever been published; routing is impossible.
    #[error("no backends available: no node list has been loaded yet")]
    NoBackends,

    /// A single backend call failed at the transport level.
    #[error("upstream {target} failed: {source}")]
    Upstream {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    /// The embedding phase of a meta-search failed.
    #[error("embedding phase failed: {0}")]
    Embed(String),
}
