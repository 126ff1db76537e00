use thiserror::Error;

use crate::models::bar::BarField;

/// Errors produced while building a permuted surrogate series.
///
/// Every variant aborts the whole call; no partial series is ever returned.
#[derive(Debug, Error, PartialEq)]
pub enum PermutationError {
    /// The input series has no bars, so there is no anchor to rebuild from.
    #[error("cannot permute an empty bar series")]
    EmptySeries,

    /// A numeric field holds an infinity, which no sanitizer policy covers.
    #[error("bar {index}: field `{field}` is not finite ({value})")]
    NonFiniteValue {
        index: usize,
        field: BarField,
        value: f64,
    },

    /// A permutation source returned the wrong number of indices.
    #[error("permutation source returned {actual} indices, expected {expected}")]
    PermutationLength { expected: usize, actual: usize },

    /// A permutation source returned a repeated or out-of-range index.
    #[error("permutation source did not return a permutation of 0..{len}")]
    NotAPermutation { len: usize },
}
