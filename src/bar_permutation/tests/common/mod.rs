#![allow(dead_code)]

use bar_permutation::{Bar, BarField, BarSeries, PermutationSource};

/// Builds a bar whose numeric fields are `exp` of the given log values.
pub fn bar_from_logs(logs: [f64; 7], date: usize) -> Bar<usize> {
    let [open, high, low, close, tickvol, volume, spread] = logs.map(f64::exp);
    Bar {
        open,
        high,
        low,
        close,
        tickvol,
        volume,
        spread,
        date,
    }
}

/// A gently trending series with counts kept at or above 1.
pub fn trending_series(n: usize) -> BarSeries<usize> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            let open = 100.0 + t * 0.3 + (t * 0.7).sin();
            Bar {
                open,
                high: open + 1.0 + (t * 0.3).cos().abs(),
                low: open - 0.8,
                close: open + (t * 1.3).sin() * 0.5,
                tickvol: 40.0 + (t * 0.9).cos() * 20.0,
                volume: 1_000.0 + t * 15.0,
                spread: 2.0 + (i % 3) as f64,
                date: i,
            }
        })
        .collect()
}

pub fn ln_of(bar: &Bar<usize>, field: BarField) -> f64 {
    let v = bar.value(field);
    if field.is_price() { v.ln() } else { v.ln().abs() }
}

pub fn assert_close(got: f64, want: f64, tol: f64, what: &str) {
    assert!(
        (got - want).abs() <= tol * want.abs().max(1.0),
        "{what}: got {got}, want {want}"
    );
}

/// Wraps another source and keeps a copy of every permutation it hands out.
pub struct Recording<S> {
    pub inner: S,
    pub drawn: Vec<Vec<usize>>,
}

impl<S> Recording<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            drawn: Vec::new(),
        }
    }
}

impl<S: PermutationSource> PermutationSource for Recording<S> {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let p = self.inner.permutation(len);
        self.drawn.push(p.clone());
        p
    }
}
