//! RSI (Relative Strength Index).
//!
//! Gain is the trailing simple mean of positive close deltas over the
//! window, loss the trailing mean of the magnitudes of negative deltas.
//! RSI = 100 - 100 / (1 + gain/loss); when loss is exactly zero the
//! ratio is undefined and RSI is pinned to its upper bound of 100.
//!
//! Warmup: the first bar has no delta, so the first `window` entries are
//! invalid and the entry at index `window` is the first defined one.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries, IndicatorValue};
use crate::domain::ohlcv::OhlcvBar;

pub const RSI_WINDOW: usize = 14;

pub fn calculate_rsi(bars: &[OhlcvBar], window: usize) -> IndicatorSeries {
    let mut gains: Vec<f64> = Vec::new();
    let mut losses: Vec<f64> = Vec::new();
    for i in 1..bars.len() {
        let delta = bars[i].close - bars[i - 1].close;
        gains.push(if delta > 0.0 { delta } else { 0.0 });
        losses.push(if delta < 0.0 { -delta } else { 0.0 });
    }

    let mut values = Vec::with_capacity(bars.len());
    for (i, bar) in bars.iter().enumerate() {
        if window == 0 || i < window {
            values.push(IndicatorPoint {
                date: bar.date,
                valid: false,
                value: IndicatorValue::Simple(f64::NAN),
            });
            continue;
        }

        // Deltas for bars (i - window + 1)..=i live at gains[i - window..i].
        let start = i - window;
        let gain: f64 = gains[start..i].iter().sum::<f64>() / window as f64;
        let loss: f64 = losses[start..i].iter().sum::<f64>() / window as f64;

        let rsi = if loss == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + gain / loss)
        };
        values.push(IndicatorPoint {
            date: bar.date,
            valid: true,
            value: IndicatorValue::Simple(rsi),
        });
    }

    IndicatorSeries {
        kind: IndicatorKind::Rsi,
        values,
    }
}
