mod common;

use bar_permutation::{BarField, BarSeries, FixedPermutations, permute_bars};
use common::{assert_close, bar_from_logs, ln_of};

/// Log-space rows: open, high, low, close, tickvol, volume, spread.
const LOGS: [[f64; 7]; 4] = [
    [0.00, 0.10, -0.10, 0.05, 1.0, 3.0, 0.2],
    [0.06, 0.20, 0.00, 0.15, 1.5, 3.5, 0.4],
    [0.14, 0.18, 0.05, 0.10, 1.2, 2.5, 0.0],
    [0.12, 0.30, 0.10, 0.25, 2.0, 3.0, 0.3],
];

fn four_bars() -> BarSeries<usize> {
    let mut bars: Vec<_> = LOGS
        .iter()
        .enumerate()
        .map(|(i, row)| bar_from_logs(*row, 1000 + i))
        .collect();
    // zero spread on bar 2 goes through the sanitizer (ln 1 = 0, same as the table)
    bars[2].spread = 0.0;
    BarSeries::new(bars)
}

#[test]
fn four_bar_scenario_matches_hand_computation() {
    let input = four_bars();
    // intra triplets: position 1 <- bar 3, 2 <- bar 1, 3 <- bar 2
    // inter quadruples: position 1 <- bar 2, 2 <- bar 3, 3 <- bar 1
    let mut source = FixedPermutations::new([vec![2, 0, 1], vec![1, 2, 0]]);
    let out = permute_bars(&input, &mut source).unwrap();

    // open = prev close + open diff; h/l/c = open + intra diff
    // counts accumulate their own diffs from the anchor
    let expected: [[f64; 7]; 4] = [
        LOGS[0],
        [0.04, 0.22, 0.02, 0.17, 0.7, 2.0, -0.2],
        [0.19, 0.33, 0.13, 0.28, 1.5, 2.5, 0.1],
        [0.29, 0.33, 0.20, 0.25, 2.0, 3.0, 0.3],
    ];

    assert_eq!(out.dates().copied().collect::<Vec<_>>(), vec![1000, 1001, 1002, 1003]);
    for (i, (bar, row)) in out.iter().zip(expected).enumerate() {
        for (field, want) in BarField::ALL.into_iter().zip(row) {
            // counts come back as exp of the accumulated log, sign included
            let got = bar.value(field).ln();
            assert_close(got, want, 1e-12, &format!("bar {i} {field}"));
        }
    }
}

#[test]
fn negative_accumulated_count_comes_back_positive() {
    let out = permute_bars(
        &four_bars(),
        &mut FixedPermutations::new([vec![2, 0, 1], vec![1, 2, 0]]),
    )
    .unwrap();
    let spread = out.bars()[1].spread;
    assert!(spread > 0.0 && spread < 1.0);
    assert_close(spread, (-0.2f64).exp(), 1e-12, "spread");
}

#[test]
fn identity_permutation_rebuilds_the_sanitized_input() {
    let input = four_bars();
    let out = permute_bars(&input, &mut FixedPermutations::identity()).unwrap();
    for (i, (got, want)) in out.iter().zip(input.iter()).enumerate() {
        for field in BarField::ALL {
            let want = if want.value(field) > 0.0 { want.value(field) } else { 1.0 };
            assert_close(got.value(field), want, 1e-12, &format!("bar {i} {field}"));
        }
    }
}

#[test]
fn inconsistent_bars_are_not_repaired() {
    // bar 2 has its high below its open; the surrogate keeps that triplet as is
    let logs = [
        [0.0, 0.01, -0.01, 0.0, 1.0, 1.0, 1.0],
        [0.5, 0.51, 0.49, 0.5, 1.0, 1.0, 1.0],
        [0.5, 0.4, 0.3, 0.45, 1.0, 1.0, 1.0],
    ];
    let input: BarSeries<usize> = logs
        .iter()
        .enumerate()
        .map(|(i, r)| bar_from_logs(*r, i))
        .collect();
    let out = permute_bars(&input, &mut FixedPermutations::new([vec![1, 0], vec![0, 1]])).unwrap();

    let b1 = &out.bars()[1];
    assert!(b1.high < b1.open);
    assert_close(ln_of(b1, BarField::Open), 0.5, 1e-12, "open");
    assert_close(ln_of(b1, BarField::High), 0.4, 1e-12, "high");

    let b2 = &out.bars()[2];
    assert_close(ln_of(b2, BarField::Open), 0.45, 1e-12, "open");
    assert_close(ln_of(b2, BarField::Close), 0.45, 1e-12, "close");
}
