//! Indicator engine: series + requested indicator set -> augmented series.

use crate::domain::indicator::bollinger::{calculate_bollinger, BOLLINGER_MULT, BOLLINGER_WINDOW};
use crate::domain::indicator::ma::{calculate_ma, MA_WINDOW};
use crate::domain::indicator::macd::{calculate_macd, MACD_FAST_SPAN, MACD_SLOW_SPAN};
use crate::domain::indicator::rsi::{calculate_rsi, RSI_WINDOW};
use crate::domain::indicator::{IndicatorKind, IndicatorSeries, IndicatorSet};
use crate::domain::series::PriceSeries;
use std::collections::BTreeMap;

/// A price series plus one derived column per computed indicator, each
/// aligned one-to-one with the bars (same length, same dates).
#[derive(Debug, Clone)]
pub struct AugmentedSeries {
    pub series: PriceSeries,
    pub columns: BTreeMap<IndicatorKind, IndicatorSeries>,
}

impl AugmentedSeries {
    pub fn column(&self, kind: IndicatorKind) -> Option<&IndicatorSeries> {
        self.columns.get(&kind)
    }
}

/// Compute the requested indicators over the series.
///
/// Pure and deterministic: the input is consumed unchanged into the
/// output and every column is a fresh allocation. An empty series yields
/// an augmented series with no columns; callers check for the columns
/// they expect rather than relying on an error.
pub fn compute(series: PriceSeries, requested: &IndicatorSet) -> AugmentedSeries {
    let mut columns = BTreeMap::new();

    if !series.is_empty() {
        for kind in requested {
            let column = match kind {
                IndicatorKind::MovingAverage => calculate_ma(series.bars(), MA_WINDOW),
                IndicatorKind::Rsi => calculate_rsi(series.bars(), RSI_WINDOW),
                IndicatorKind::Bollinger => {
                    calculate_bollinger(series.bars(), BOLLINGER_WINDOW, BOLLINGER_MULT)
                }
                IndicatorKind::Macd => {
                    calculate_macd(series.bars(), MACD_FAST_SPAN, MACD_SLOW_SPAN)
                }
            };
            columns.insert(*kind, column);
        }
    }

    AugmentedSeries { series, columns }
}
