//! Typed errors for the intel library.
//!
//! The public failure surface is deliberately a single kind: every
//! problem between issuing a fetch and producing a valid `Listing`
//! (transport, quota, non-JSON body, schema mismatch) collapses into
//! `IntelError::DataBlock`. The original diagnostic is logged at the
//! point of failure, never propagated structurally.

use thiserror::Error;

/// Errors produced by the intel library.
#[derive(Debug, Error)]
pub enum IntelError {
    /// Any failure while fetching and assembling a listing.
    #[error("Intelligence engine encountered a data block. Please try a different product name.")]
    DataBlock,
}

/// Result type alias for intel operations.
pub type Result<T> = std::result::Result<T, IntelError>;
