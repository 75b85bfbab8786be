//! Moving-average crossover signal detection.
//!
//! Two simple moving averages of close are compared bar by bar: a fast
//! 50-bar mean and a slow 200-bar mean, both with a relaxed minimum so
//! they are defined from the first bar over however many bars exist.
//! A Buy is emitted where the fast average moves from at-or-below the
//! slow average to strictly above it, a Sell on the mirror transition.
//! Only transitions emit — a sustained state never re-signals.
//!
//! The accuracy figure is a backward-looking heuristic, not a backtest:
//! a hit is counted when the bar after a signal bar moved in the
//! signalled direction, and the total is divided by the signal count.

use crate::domain::series::PriceSeries;
use chrono::NaiveDate;
use std::fmt;

pub const FAST_WINDOW: usize = 50;
pub const SLOW_WINDOW: usize = 200;

/// Below this many bars the slow average is not meaningful and detection
/// short-circuits to an empty report.
pub const MIN_BARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Buy,
    Sell,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Buy => write!(f, "BUY"),
            Direction::Sell => write!(f, "SELL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signal {
    pub date: NaiveDate,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignalReport {
    pub signals: Vec<Signal>,
    /// Percentage in [0, 100]; exactly 0.0 when no signals were emitted.
    pub accuracy_pct: f64,
}

impl SignalReport {
    pub fn empty() -> Self {
        Self {
            signals: Vec::new(),
            accuracy_pct: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

/// Trailing mean over up to `window` values, defined from the first
/// entry (the window grows until full).
fn rolling_mean_relaxed(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0.0;

    for i in 0..values.len() {
        sum += values[i];
        if i >= window {
            sum -= values[i - window];
        }
        let count = (i + 1).min(window);
        out.push(sum / count as f64);
    }

    out
}

pub fn detect(series: &PriceSeries) -> SignalReport {
    let closes = series.closes();
    if closes.len() < MIN_BARS {
        return SignalReport::empty();
    }

    let fast = rolling_mean_relaxed(&closes, FAST_WINDOW);
    let slow = rolling_mean_relaxed(&closes, SLOW_WINDOW);

    let mut signals: Vec<Signal> = Vec::new();
    let mut hits = 0usize;
    let mut prev_signal: Option<Direction> = None;

    for i in 1..closes.len() {
        let emitted = if fast[i - 1] <= slow[i - 1] && fast[i] > slow[i] {
            Some(Direction::Buy)
        } else if fast[i - 1] >= slow[i - 1] && fast[i] < slow[i] {
            Some(Direction::Sell)
        } else {
            None
        };

        if let Some(direction) = emitted {
            signals.push(Signal {
                date: series.bars()[i].date,
                direction,
            });
        }

        if i > 1 {
            let rose = closes[i] > closes[i - 1];
            let fell = closes[i] < closes[i - 1];
            match prev_signal {
                Some(Direction::Buy) if rose => hits += 1,
                Some(Direction::Sell) if fell => hits += 1,
                _ => {}
            }
        }

        prev_signal = emitted;
    }

    let accuracy_pct = if signals.is_empty() {
        0.0
    } else {
        hits as f64 / signals.len() as f64 * 100.0
    };

    SignalReport {
        signals,
        accuracy_pct,
    }
}
