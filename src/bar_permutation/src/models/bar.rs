//! Canonical in-memory representation of one time-series bar.
//!
//! A [`Bar`] carries the seven numeric fields the permutation works on plus an
//! opaque date. The date type is generic: the permutation never parses,
//! compares or recomputes it, it only carries it through in position order.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single OHLC bar with tick volume, volume and spread.
///
/// Numeric fields use `NaN` for a missing value. Missing and non-positive
/// values are replaced by the sanitizer before any log transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar<D = DateTime<Utc>> {
    /// Opening price.
    #[serde(deserialize_with = "nullable_f64")]
    pub open: f64,

    /// Highest price during the bar interval.
    #[serde(deserialize_with = "nullable_f64")]
    pub high: f64,

    /// Lowest price during the bar interval.
    #[serde(deserialize_with = "nullable_f64")]
    pub low: f64,

    /// Closing price.
    #[serde(deserialize_with = "nullable_f64")]
    pub close: f64,

    /// Number of ticks in the bar interval.
    #[serde(deserialize_with = "nullable_f64")]
    pub tickvol: f64,

    /// Volume traded during the bar interval.
    #[serde(deserialize_with = "nullable_f64")]
    pub volume: f64,

    /// Quoted spread for the bar.
    #[serde(deserialize_with = "nullable_f64")]
    pub spread: f64,

    /// Bar timestamp, passed through untouched.
    pub date: D,
}

/// Names one numeric field of a [`Bar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarField {
    Open,
    High,
    Low,
    Close,
    Tickvol,
    Volume,
    Spread,
}

impl BarField {
    /// Every numeric field, in column order.
    pub const ALL: [BarField; 7] = [
        BarField::Open,
        BarField::High,
        BarField::Low,
        BarField::Close,
        BarField::Tickvol,
        BarField::Volume,
        BarField::Spread,
    ];

    /// Column name as it appears in serialized records.
    pub const fn name(self) -> &'static str {
        match self {
            BarField::Open => "open",
            BarField::High => "high",
            BarField::Low => "low",
            BarField::Close => "close",
            BarField::Tickvol => "tickvol",
            BarField::Volume => "volume",
            BarField::Spread => "spread",
        }
    }

    /// Prices go through a plain log; the other fields are count-like.
    pub const fn is_price(self) -> bool {
        matches!(
            self,
            BarField::Open | BarField::High | BarField::Low | BarField::Close
        )
    }
}

impl fmt::Display for BarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<D> Bar<D> {
    /// Reads one numeric field.
    pub fn value(&self, field: BarField) -> f64 {
        match field {
            BarField::Open => self.open,
            BarField::High => self.high,
            BarField::Low => self.low,
            BarField::Close => self.close,
            BarField::Tickvol => self.tickvol,
            BarField::Volume => self.volume,
            BarField::Spread => self.spread,
        }
    }

    /// Builds a new bar by applying `f` to every numeric field; the date is cloned.
    pub fn map_values(&self, mut f: impl FnMut(BarField, f64) -> f64) -> Bar<D>
    where
        D: Clone,
    {
        Bar {
            open: f(BarField::Open, self.open),
            high: f(BarField::High, self.high),
            low: f(BarField::Low, self.low),
            close: f(BarField::Close, self.close),
            tickvol: f(BarField::Tickvol, self.tickvol),
            volume: f(BarField::Volume, self.volume),
            spread: f(BarField::Spread, self.spread),
            date: self.date.clone(),
        }
    }
}

// `null` is a missing value; an absent key is still a "missing field" error.
fn nullable_f64<'de, De>(de: De) -> Result<f64, De::Error>
where
    De: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(de)?.unwrap_or(f64::NAN))
}
