//! Price series construction and lookup.
//!
//! A [`PriceSeries`] is the immutable input to the indicator engine and
//! signal detector: bars sorted strictly ascending by date, duplicate
//! dates dropped at ingestion keeping the first occurrence. Derived data
//! is always a new allocation; the series itself is never mutated
//! downstream.

use crate::domain::ohlcv::OhlcvBar;
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct PriceSeries {
    pub symbol: String,
    pub exchange: String,
    bars: Vec<OhlcvBar>,
    date_index: HashMap<NaiveDate, usize>,
}

impl PriceSeries {
    /// Build a series from provider output: sort ascending by date and
    /// keep the first bar for any duplicated date.
    pub fn from_bars(symbol: String, exchange: String, mut bars: Vec<OhlcvBar>) -> Self {
        bars.sort_by_key(|b| b.date);

        let mut deduped: Vec<OhlcvBar> = Vec::with_capacity(bars.len());
        for bar in bars {
            if deduped.last().map(|b: &OhlcvBar| b.date) == Some(bar.date) {
                continue;
            }
            deduped.push(bar);
        }

        let date_index = deduped
            .iter()
            .enumerate()
            .map(|(i, bar)| (bar.date, i))
            .collect();

        Self {
            symbol,
            exchange,
            bars: deduped,
            date_index,
        }
    }

    pub fn bars(&self) -> &[OhlcvBar] {
        &self.bars
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn get_bar(&self, date: NaiveDate) -> Option<&OhlcvBar> {
        self.date_index.get(&date).map(|&i| &self.bars[i])
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.bars.first().map(|b| b.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }
}
