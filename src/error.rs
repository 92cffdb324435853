//! Error types for fanmap

use thiserror::Error;

/// Errors surfaced by the bridge and the demo workloads.
///
/// The parallel map combinator itself is generic over its error type and
/// propagates whatever the caller's transform returns; these variants cover
/// the pieces this crate ships.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Fetch errors
    /// HTTP request or body read failed
    ///
    /// **Triggered by:** Connection failures, DNS errors, aborted transfers
    /// **Example:** Fetching from an unreachable host
    #[error("Network request failed: {reason}")]
    Network {
        /// Stringified cause from the HTTP client
        reason: String,
    },

    /// Response arrived but carried zero body bytes
    #[error("Response body was empty")]
    EmptyBody,

    /// Response body was not valid UTF-8 text
    #[error("Response body was not valid UTF-8")]
    InvalidUtf8,

    // Bridge errors
    /// Callback completed without delivering a value or an error
    ///
    /// **Triggered by:** Legacy `(data, error)` callbacks invoked with both
    /// parts absent
    #[error("Callback produced neither a value nor an error")]
    EmptyResult,

    /// Bridge callback dropped its continuation without resuming it
    ///
    /// **Triggered by:** A registered callback going out of scope unfired
    /// **Prevention:** Resume every continuation exactly once
    #[error("Continuation dropped before being resumed")]
    ContinuationDropped,

    // Workload errors
    /// Factorization requested for a negative number
    #[error("Cannot factorize negative input: {value}")]
    NegativeInput {
        /// The offending input
        value: i64,
    },
}

/// Result type alias for fanmap operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
