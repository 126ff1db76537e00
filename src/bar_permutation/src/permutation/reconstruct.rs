//! Sequential rebuild of a log-space path from permuted differences.

use super::{
    diff::{InterBarDiff, IntraBarDiff},
    log_space::LogBar,
};

/// Rebuilds bars `1..N` by a forward scan starting at `anchor`.
///
/// Each bar's open is the previous close plus its inter-bar open diff;
/// high/low/close hang off that open. Count fields accumulate on their own.
/// The scan is a prefix sum, so the last value of every accumulated field
/// depends only on the multiset of diffs, not on their order. Nothing keeps
/// high above low in the result.
pub(crate) fn reconstruct(
    anchor: &LogBar,
    intra: &[IntraBarDiff],
    inter: &[InterBarDiff],
) -> Vec<LogBar> {
    debug_assert_eq!(intra.len(), inter.len());

    let mut out = Vec::with_capacity(intra.len());
    let mut prev = *anchor;
    for (a, e) in intra.iter().zip(inter) {
        let open = prev.close + e.open;
        let bar = LogBar {
            open,
            high: open + a.high,
            low: open + a.low,
            close: open + a.close,
            tickvol: prev.tickvol + e.tickvol,
            volume: prev.volume + e.volume,
            spread: prev.spread + e.spread,
        };
        out.push(bar);
        prev = bar;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::diff::relative_diffs;

    fn path() -> Vec<LogBar> {
        [
            (0.0, 0.1, -0.1, 0.05, 1.0),
            (0.06, 0.2, 0.0, 0.15, 1.5),
            (0.14, 0.18, 0.05, 0.1, 1.2),
            (0.12, 0.3, 0.1, 0.25, 2.0),
        ]
        .into_iter()
        .map(|(open, high, low, close, c)| LogBar {
            open,
            high,
            low,
            close,
            tickvol: c,
            volume: c + 1.0,
            spread: c / 2.0,
        })
        .collect()
    }

    fn assert_log_bar_close(a: &LogBar, b: &LogBar) {
        let pairs = [
            (a.open, b.open),
            (a.high, b.high),
            (a.low, b.low),
            (a.close, b.close),
            (a.tickvol, b.tickvol),
            (a.volume, b.volume),
            (a.spread, b.spread),
        ];
        for (x, y) in pairs {
            assert!((x - y).abs() < 1e-12, "{x} vs {y}");
        }
    }

    #[test]
    fn unpermuted_diffs_rebuild_the_input() {
        let bars = path();
        let diffs = relative_diffs(&bars);
        let rebuilt = reconstruct(&bars[0], &diffs.intra, &diffs.inter);
        assert_eq!(rebuilt.len(), 3);
        for (got, want) in rebuilt.iter().zip(&bars[1..]) {
            assert_log_bar_close(got, want);
        }
    }

    #[test]
    fn reversed_diffs_keep_the_endpoint() {
        let bars = path();
        let diffs = relative_diffs(&bars);
        let intra: Vec<_> = diffs.intra.iter().rev().copied().collect();
        let inter: Vec<_> = diffs.inter.iter().rev().copied().collect();
        let rebuilt = reconstruct(&bars[0], &intra, &inter);
        let last = rebuilt.last().unwrap();
        let want = bars.last().unwrap();
        assert!((last.close - want.close).abs() < 1e-12);
        assert!((last.tickvol - want.tickvol).abs() < 1e-12);
        assert!((last.volume - want.volume).abs() < 1e-12);
        assert!((last.spread - want.spread).abs() < 1e-12);
    }

    #[test]
    fn empty_diffs_give_empty_path() {
        let bars = path();
        assert!(reconstruct(&bars[0], &[], &[]).is_empty());
    }
}
