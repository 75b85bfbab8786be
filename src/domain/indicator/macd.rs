//! MACD line: EMA(fast span) of close minus EMA(slow span) of close.
//!
//! Both EMAs are seeded from the first close, so the line is defined for
//! every bar from the first — there is no warmup.

use crate::domain::indicator::ema::ewm_mean;
use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries, IndicatorValue};
use crate::domain::ohlcv::OhlcvBar;

pub const MACD_FAST_SPAN: usize = 12;
pub const MACD_SLOW_SPAN: usize = 26;

pub fn calculate_macd(bars: &[OhlcvBar], fast_span: usize, slow_span: usize) -> IndicatorSeries {
    if bars.is_empty() || fast_span == 0 || slow_span == 0 {
        let values = bars
            .iter()
            .map(|b| IndicatorPoint {
                date: b.date,
                valid: false,
                value: IndicatorValue::Simple(f64::NAN),
            })
            .collect();
        return IndicatorSeries {
            kind: IndicatorKind::Macd,
            values,
        };
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let ema_fast = ewm_mean(&closes, fast_span);
    let ema_slow = ewm_mean(&closes, slow_span);

    let values = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| IndicatorPoint {
            date: bar.date,
            valid: true,
            value: IndicatorValue::Simple(ema_fast[i] - ema_slow[i]),
        })
        .collect();

    IndicatorSeries {
        kind: IndicatorKind::Macd,
        values,
    }
}
