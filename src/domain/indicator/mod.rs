//! Technical indicator types and computation.
//!
//! - `IndicatorKind`: indicator identity; an [`IndicatorSet`] is a set of
//!   kinds where only membership matters.
//! - `IndicatorPoint` / `IndicatorValue`: one entry of a derived column,
//!   carrying a validity flag for warmup entries (value is NaN while the
//!   lookback window is unfilled).
//! - `IndicatorSeries`: a derived column aligned one-to-one with the bars
//!   of the series it was computed from.
//! - [`engine::compute`]: series + requested set -> augmented series.

pub mod bollinger;
pub mod ema;
pub mod engine;
pub mod ma;
pub mod macd;
pub mod rsi;

use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Requested indicators; order irrelevant, membership is what matters.
/// A `BTreeSet` keeps iteration (and cache keys) deterministic.
pub type IndicatorSet = BTreeSet<IndicatorKind>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndicatorKind {
    MovingAverage,
    Rsi,
    Bollinger,
    Macd,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub valid: bool,
    pub value: IndicatorValue,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorValue {
    Simple(f64),
    Bollinger { upper: f64, lower: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    pub kind: IndicatorKind,
    pub values: Vec<IndicatorPoint>,
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorKind::MovingAverage => write!(f, "MA"),
            IndicatorKind::Rsi => write!(f, "RSI"),
            IndicatorKind::Bollinger => write!(f, "BB"),
            IndicatorKind::Macd => write!(f, "MACD"),
        }
    }
}

impl FromStr for IndicatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ma" | "moving-average" => Ok(IndicatorKind::MovingAverage),
            "rsi" => Ok(IndicatorKind::Rsi),
            "bb" | "bollinger" => Ok(IndicatorKind::Bollinger),
            "macd" => Ok(IndicatorKind::Macd),
            other => Err(format!(
                "unknown indicator '{}' (expected ma, rsi, bollinger or macd)",
                other
            )),
        }
    }
}

/// Parse a comma-separated indicator list into a set, e.g. `ma,rsi,macd`.
pub fn parse_indicator_set(input: &str) -> Result<IndicatorSet, String> {
    let mut set = IndicatorSet::new();
    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            continue;
        }
        set.insert(trimmed.parse()?);
    }
    Ok(set)
}
