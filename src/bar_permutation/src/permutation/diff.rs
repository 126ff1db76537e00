//! Relative differences between consecutive log-space bars.
//!
//! Fields that must travel together under a permutation are grouped in one
//! struct, so reordering a `Vec` of groups can never split them.

use super::log_space::LogBar;

/// High/low/close of a bar relative to its own open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IntraBarDiff {
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Open relative to the previous close; count fields relative to their previous value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct InterBarDiff {
    pub open: f64,
    pub tickvol: f64,
    pub volume: f64,
    pub spread: f64,
}

/// Both difference groups for bars `1..N`. Entry `k` belongs to bar `k + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RelativeDiffs {
    pub intra: Vec<IntraBarDiff>,
    pub inter: Vec<InterBarDiff>,
}

impl RelativeDiffs {
    pub fn len(&self) -> usize {
        self.intra.len()
    }
}

/// Differences every bar after the anchor. The anchor itself only provides
/// the previous values for bar 1.
pub(crate) fn relative_diffs(bars: &[LogBar]) -> RelativeDiffs {
    let n = bars.len().saturating_sub(1);
    let mut diffs = RelativeDiffs {
        intra: Vec::with_capacity(n),
        inter: Vec::with_capacity(n),
    };

    for pair in bars.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        diffs.intra.push(IntraBarDiff {
            high: cur.high - cur.open,
            low: cur.low - cur.open,
            close: cur.close - cur.open,
        });
        diffs.inter.push(InterBarDiff {
            open: cur.open - prev.close,
            tickvol: cur.tickvol - prev.tickvol,
            volume: cur.volume - prev.volume,
            spread: cur.spread - prev.spread,
        });
    }

    diffs
}

/// Reorders `values` so that output position `k` holds `values[perm[k]]`.
///
/// `perm` must already be validated as a permutation of `0..values.len()`.
pub(crate) fn apply_permutation<T: Copy>(values: &[T], perm: &[usize]) -> Vec<T> {
    perm.iter().map(|&src| values[src]).collect()
}
