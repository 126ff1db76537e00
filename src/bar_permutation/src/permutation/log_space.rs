//! Forward and inverse log transforms.
//!
//! Prices map to `ln(x)`. Count-like fields map to `|ln(x)|`, which folds
//! values below 1 onto their reciprocal: `0.5` and `2.0` both become `ln 2`.
//! The inverse is `|exp(x)|` for every field, so a count below 1 comes back
//! as its reciprocal.

use crate::models::bar::{Bar, BarField};

/// One bar in log space. Dates stay with the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LogBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub tickvol: f64,
    pub volume: f64,
    pub spread: f64,
}

/// Forward transform of a single sanitized value.
pub fn to_log(field: BarField, value: f64) -> f64 {
    if field.is_price() {
        value.ln()
    } else {
        value.ln().abs()
    }
}

/// Inverse transform, identical for every field.
pub fn from_log(value: f64) -> f64 {
    value.exp().abs()
}

/// Whether `value` survives `from_log(to_log(field, value))` unchanged
/// (up to rounding). False only for count fields below 1.
pub fn round_trips(field: BarField, value: f64) -> bool {
    field.is_price() || value >= 1.0
}

impl LogBar {
    /// Transforms an already sanitized bar.
    pub fn from_bar<D>(bar: &Bar<D>) -> Self {
        Self {
            open: to_log(BarField::Open, bar.open),
            high: to_log(BarField::High, bar.high),
            low: to_log(BarField::Low, bar.low),
            close: to_log(BarField::Close, bar.close),
            tickvol: to_log(BarField::Tickvol, bar.tickvol),
            volume: to_log(BarField::Volume, bar.volume),
            spread: to_log(BarField::Spread, bar.spread),
        }
    }

    /// Applies the inverse transform and attaches `date`.
    pub fn into_bar<D>(self, date: D) -> Bar<D> {
        Bar {
            open: from_log(self.open),
            high: from_log(self.high),
            low: from_log(self.low),
            close: from_log(self.close),
            tickvol: from_log(self.tickvol),
            volume: from_log(self.volume),
            spread: from_log(self.spread),
            date,
        }
    }
}
