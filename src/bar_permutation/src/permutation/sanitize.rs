//! Replacement of values the log transform cannot take.
//!
//! Missing (`NaN`) and non-positive values become [`SENTINEL`]. The mapping is
//! lossy: a genuine zero volume or zero spread is indistinguishable from the
//! sentinel once the surrogate has been rebuilt.

use crate::errors::PermutationError;
use crate::models::{bar::Bar, bar_series::BarSeries};

/// Value substituted for missing or non-positive inputs.
pub const SENTINEL: f64 = 1.0;

/// Counts of substitutions made while sanitizing a series.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeReport {
    /// Substitutions in open/high/low/close.
    pub prices_replaced: usize,
    /// Substitutions in tickvol/volume/spread.
    pub counts_replaced: usize,
}

impl SanitizeReport {
    pub fn total(&self) -> usize {
        self.prices_replaced + self.counts_replaced
    }
}

/// Maps `NaN` and values `<= 0` to [`SENTINEL`]; everything else is kept.
pub fn sanitize_value(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        SENTINEL
    } else {
        value
    }
}

/// Sanitizes every numeric field of one bar.
pub fn sanitize_bar<D: Clone>(bar: &Bar<D>) -> Bar<D> {
    bar.map_values(|_, v| sanitize_value(v))
}

/// Sanitizes a whole series, rejecting infinities first.
///
/// Errors:
/// - [`PermutationError::NonFiniteValue`] for the first `±inf` found, scanning
///   bars in order and fields in column order.
pub fn sanitize_series<D: Clone>(
    series: &BarSeries<D>,
) -> Result<(Vec<Bar<D>>, SanitizeReport), PermutationError> {
    let mut report = SanitizeReport::default();
    let mut out = Vec::with_capacity(series.len());

    for (index, bar) in series.iter().enumerate() {
        let mut bad = None;
        let clean = bar.map_values(|field, v| {
            if v.is_infinite() {
                bad.get_or_insert((field, v));
                return v;
            }
            let s = sanitize_value(v);
            // bit comparison so NaN -> SENTINEL counts as a substitution
            if s.to_bits() != v.to_bits() {
                if field.is_price() {
                    report.prices_replaced += 1;
                } else {
                    report.counts_replaced += 1;
                }
            }
            s
        });
        if let Some((field, value)) = bad {
            return Err(PermutationError::NonFiniteValue {
                index,
                field,
                value,
            });
        }
        out.push(clean);
    }

    Ok((out, report))
}
