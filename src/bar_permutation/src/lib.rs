//! Monte Carlo surrogates of OHLC bar series.
//!
//! The crate builds permuted copies of a bar series for permutation tests of
//! trading systems. A surrogate keeps the date axis, the anchor bar, the
//! overall drift and each bar's high/low/close shape relative to its open,
//! while the order of moves is shuffled. See [`permute_bars`].

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod permutation;

pub use errors::PermutationError;
pub use models::{
    bar::{Bar, BarField},
    bar_series::BarSeries,
};
pub use permutation::{
    BarPermuter, permute_bars,
    source::{FixedPermutations, PermutationSource},
};
