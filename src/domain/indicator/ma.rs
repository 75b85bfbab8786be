//! Simple moving average of close over a trailing window.
//!
//! Warmup: first (window - 1) entries are invalid.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries, IndicatorValue};
use crate::domain::ohlcv::OhlcvBar;

pub const MA_WINDOW: usize = 20;

pub fn calculate_ma(bars: &[OhlcvBar], window: usize) -> IndicatorSeries {
    let mut values = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        if window == 0 || i + 1 < window {
            values.push(IndicatorPoint {
                date: bar.date,
                valid: false,
                value: IndicatorValue::Simple(f64::NAN),
            });
            continue;
        }

        let start = i + 1 - window;
        let mean: f64 =
            bars[start..=i].iter().map(|b| b.close).sum::<f64>() / window as f64;
        values.push(IndicatorPoint {
            date: bar.date,
            valid: true,
            value: IndicatorValue::Simple(mean),
        });
    }

    IndicatorSeries {
        kind: IndicatorKind::MovingAverage,
        values,
    }
}
