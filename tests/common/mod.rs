#![allow(dead_code)]

use chrono::NaiveDate;
use marketmind::domain::error::MarketMindError;
pub use marketmind::domain::ohlcv::OhlcvBar;
use marketmind::domain::series::PriceSeries;
use marketmind::domain::ticker::{Exchange, Period};
use marketmind::ports::data_port::PriceDataPort;
use std::collections::{HashMap, HashSet};

pub struct MockDataPort {
    pub data: HashMap<String, Vec<OhlcvBar>>,
    pub errors: HashMap<String, String>,
    /// (symbol, period) pairs that return no bars, for fallback tests.
    pub empty_periods: HashSet<(String, Period)>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
            empty_periods: HashSet::new(),
        }
    }

    pub fn with_bars(mut self, symbol: &str, bars: Vec<OhlcvBar>) -> Self {
        self.data.insert(symbol.to_string(), bars);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }

    pub fn with_empty_period(mut self, symbol: &str, period: Period) -> Self {
        self.empty_periods.insert((symbol.to_string(), period));
        self
    }
}

impl PriceDataPort for MockDataPort {
    fn fetch_history(
        &self,
        symbol: &str,
        _exchange: Exchange,
        period: Period,
    ) -> Result<Vec<OhlcvBar>, MarketMindError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(MarketMindError::Data {
                reason: reason.clone(),
            });
        }
        if self.empty_periods.contains(&(symbol.to_string(), period)) {
            return Ok(Vec::new());
        }
        Ok(self.data.get(symbol).cloned().unwrap_or_default())
    }

    fn list_symbols(&self, _exchange: Exchange) -> Result<Vec<String>, MarketMindError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    fn data_range(
        &self,
        symbol: &str,
        _exchange: Exchange,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, MarketMindError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(MarketMindError::Data {
                reason: reason.clone(),
            });
        }
        match self.data.get(symbol) {
            Some(bars) if !bars.is_empty() => {
                let min = bars.iter().map(|b| b.date).min().unwrap();
                let max = bars.iter().map(|b| b.date).max().unwrap();
                Ok(Some((min, max, bars.len())))
            }
            _ => Ok(None),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_bar(symbol: &str, date_str: &str, close: f64) -> OhlcvBar {
    OhlcvBar {
        symbol: symbol.to_string(),
        exchange: "NSE".to_string(),
        date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        open: close - 1.0,
        high: close + 1.0,
        low: close - 2.0,
        close,
        volume: 1000,
    }
}

pub fn generate_bars(symbol: &str, start_date: &str, closes: &[f64]) -> Vec<OhlcvBar> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| OhlcvBar {
            symbol: symbol.to_string(),
            exchange: "NSE".to_string(),
            date: start + chrono::Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1000,
        })
        .collect()
}

pub fn make_series(symbol: &str, closes: &[f64]) -> PriceSeries {
    PriceSeries::from_bars(
        symbol.to_string(),
        "NSE".to_string(),
        generate_bars(symbol, "2023-01-02", closes),
    )
}

/// Closes whose 50-bar mean dips below and later recovers above the
/// relaxed 200-bar mean: flat stretch, deep trough, strong recovery.
pub fn crossing_closes() -> Vec<f64> {
    let mut closes = vec![100.0; 60];
    closes.extend(vec![50.0; 60]);
    closes.extend(vec![150.0; 120]);
    closes
}
