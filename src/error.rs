//! Error kinds surfaced to callers.
//!
//! Every error is terminal for the call that produced it: nothing is retried
//! and no partial key material is ever returned alongside one.

use alloc::string::String;

/// Errors returned by [`split`](crate::split) and [`recover`](crate::recover).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The threshold/share-count relationship is invalid (t = 0 or t > n).
    /// Rejected before any work begins.
    #[error("invalid parameters, threshold t={threshold} must satisfy 1 <= t <= n={share_count}")]
    InvalidParameters {
        threshold: usize,
        share_count: usize,
    },

    /// Fewer shares were supplied than the recovery threshold requires.
    #[error("number of shares less than threshold, n={have} < t={need}")]
    SharesBelowThreshold { have: usize, need: usize },

    /// The same evaluation point appears in more than one supplied share.
    /// A colliding point would corrupt interpolation silently, so this is
    /// treated as likely tampering.
    #[error("possible tampering, point {point} (at index {index}) appears more than once")]
    DuplicatePointInShares { point: String, index: usize },

    /// Two redundant interpolations over disjoint share selections disagree.
    /// Both candidate results are discarded.
    #[error("tampering detected, recovered keys do not match")]
    TamperDetected,

    /// A scalar string is not in the canonical encoding, or encodes a value
    /// outside its field.
    #[error("malformed scalar encoding: {0:?}")]
    Decode(String),
}
