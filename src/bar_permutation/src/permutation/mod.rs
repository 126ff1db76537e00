//! Bar permutation: sanitize, log, difference, shuffle, rebuild.
//!
//! [`permute_bars`] turns one bar series into a surrogate of the same length
//! and date axis. Intra-bar shape (high/low/close against the open) and
//! inter-bar moves (open against the previous close, count fields against
//! their previous value) are shuffled by two independent permutations and
//! summed back up from the anchor bar. The first and last closes are kept,
//! so the overall drift survives; serial structure, including volatility
//! clustering, does not.
//!
//! ```
//! use bar_permutation::{Bar, BarSeries, permute_bars};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let series: BarSeries<u32> = (0..5u32)
//!     .map(|i| {
//!         let px = 100.0 + f64::from(i);
//!         Bar { open: px, high: px + 1.0, low: px - 1.0, close: px + 0.5,
//!               tickvol: 10.0, volume: 1_000.0, spread: 2.0, date: i }
//!     })
//!     .collect();
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let surrogate = permute_bars(&series, &mut rng).unwrap();
//! assert_eq!(surrogate.len(), 5);
//! assert!(surrogate.dates().copied().eq(0..5));
//! ```

pub(crate) mod diff;
pub mod log_space;
pub(crate) mod reconstruct;
pub mod sanitize;
pub mod source;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, trace, warn};

use crate::errors::PermutationError;
use crate::models::bar_series::BarSeries;

use self::{
    diff::{apply_permutation, relative_diffs},
    log_space::LogBar,
    reconstruct::reconstruct,
    sanitize::sanitize_series,
    source::PermutationSource,
};

/// Builds one permuted surrogate of `series`.
///
/// Draws exactly two permutations of size `N - 1` from `source`: the first
/// reorders the intra-bar triplets, the second the inter-bar quadruples. The
/// anchor bar keeps its position and date; every date stays where it was.
///
/// A single-bar series is not an error: the draws are empty and the result
/// is the sanitized anchor.
///
/// Errors:
/// - [`PermutationError::EmptySeries`] when `series` has no bars
/// - [`PermutationError::NonFiniteValue`] when a field holds `±inf`
/// - [`PermutationError::PermutationLength`] / [`PermutationError::NotAPermutation`]
///   when `source` hands back something other than a permutation
#[instrument(level = "debug", skip_all, fields(bars = series.len()))]
pub fn permute_bars<D, S>(
    series: &BarSeries<D>,
    source: &mut S,
) -> Result<BarSeries<D>, PermutationError>
where
    D: Clone,
    S: PermutationSource + ?Sized,
{
    if series.is_empty() {
        return Err(PermutationError::EmptySeries);
    }

    let (sanitized, report) = sanitize_series(series)?;
    if report.prices_replaced > 0 {
        warn!(
            replaced = report.prices_replaced,
            "missing or non-positive prices replaced by sentinel"
        );
    }
    if report.counts_replaced > 0 {
        debug!(
            replaced = report.counts_replaced,
            "missing or non-positive counts replaced by sentinel"
        );
    }

    let logged: Vec<LogBar> = sanitized.iter().map(LogBar::from_bar).collect();
    let anchor = logged[0];
    let diffs = relative_diffs(&logged);

    let intra_perm = draw(source, diffs.len())?;
    let inter_perm = draw(source, diffs.len())?;
    trace!(?intra_perm, ?inter_perm, "drew permutations");

    let path = reconstruct(
        &anchor,
        &apply_permutation(&diffs.intra, &intra_perm),
        &apply_permutation(&diffs.inter, &inter_perm),
    );

    let out: BarSeries<D> = std::iter::once(anchor)
        .chain(path)
        .zip(series.iter())
        .map(|(log_bar, original)| log_bar.into_bar(original.date.clone()))
        .collect();

    debug!(sanitized = report.total(), "built surrogate series");
    Ok(out)
}

/// Takes one permutation from `source` and checks it is a bijection on `0..len`.
fn draw<S>(source: &mut S, len: usize) -> Result<Vec<usize>, PermutationError>
where
    S: PermutationSource + ?Sized,
{
    let perm = source.permutation(len);
    if perm.len() != len {
        return Err(PermutationError::PermutationLength {
            expected: len,
            actual: perm.len(),
        });
    }

    let mut seen = vec![false; len];
    for &idx in &perm {
        if idx >= len || std::mem::replace(&mut seen[idx], true) {
            return Err(PermutationError::NotAPermutation { len });
        }
    }
    Ok(perm)
}

/// Owns a permutation source and produces surrogates from it.
///
/// Each call consumes two fresh draws, so consecutive surrogates of the same
/// series differ while a seeded permuter stays reproducible end to end.
#[derive(Debug, Clone)]
pub struct BarPermuter<S> {
    source: S,
}

impl<S: PermutationSource> BarPermuter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// See [`permute_bars`].
    pub fn permute<D: Clone>(
        &mut self,
        series: &BarSeries<D>,
    ) -> Result<BarSeries<D>, PermutationError> {
        permute_bars(series, &mut self.source)
    }

    /// An endless stream of surrogates of `series`; use `take(n)`.
    pub fn surrogates<'a, D: Clone>(
        &'a mut self,
        series: &'a BarSeries<D>,
    ) -> impl Iterator<Item = Result<BarSeries<D>, PermutationError>> + 'a {
        std::iter::repeat_with(move || self.permute(series))
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl BarPermuter<ChaCha8Rng> {
    /// A permuter driven by a ChaCha8 stream seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}
