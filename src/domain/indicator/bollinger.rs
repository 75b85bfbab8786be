//! Bollinger Bands over close.
//!
//! Upper/lower = windowed mean +/- multiplier x windowed population
//! standard deviation (divides by N, not N-1).
//! Warmup: first (window - 1) entries are invalid.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries, IndicatorValue};
use crate::domain::ohlcv::OhlcvBar;

pub const BOLLINGER_WINDOW: usize = 20;
pub const BOLLINGER_MULT: f64 = 2.0;

pub fn calculate_bollinger(bars: &[OhlcvBar], window: usize, mult: f64) -> IndicatorSeries {
    let mut values = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        if window == 0 || i + 1 < window {
            values.push(IndicatorPoint {
                date: bar.date,
                valid: false,
                value: IndicatorValue::Bollinger {
                    upper: f64::NAN,
                    lower: f64::NAN,
                },
            });
            continue;
        }

        let start = i + 1 - window;
        let slice = &bars[start..=i];
        let mean: f64 = slice.iter().map(|b| b.close).sum::<f64>() / window as f64;
        let variance: f64 = slice
            .iter()
            .map(|b| {
                let diff = b.close - mean;
                diff * diff
            })
            .sum::<f64>()
            / window as f64;
        let stddev = variance.sqrt();

        values.push(IndicatorPoint {
            date: bar.date,
            valid: true,
            value: IndicatorValue::Bollinger {
                upper: mean + mult * stddev,
                lower: mean - mult * stddev,
            },
        });
    }

    IndicatorSeries {
        kind: IndicatorKind::Bollinger,
        values,
    }
}
