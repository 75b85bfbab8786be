//! Memoization of analysis reports.
//!
//! Reports are cached under an explicit key of (symbol, exchange,
//! period, indicator set); the pure core is re-invoked only when the
//! key is absent. No state hides inside the engine or detector.

use crate::domain::analysis::{AnalysisReport, AnalysisRequest};
use crate::domain::indicator::{IndicatorKind, IndicatorSet};
use crate::domain::ticker::{Exchange, Period};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    symbol: String,
    exchange: Exchange,
    period: Period,
    // BTreeSet iteration order makes this deterministic for equal sets.
    indicators: Vec<IndicatorKind>,
}

impl CacheKey {
    pub fn new(symbol: &str, exchange: Exchange, period: Period, indicators: &IndicatorSet) -> Self {
        Self {
            symbol: symbol.to_string(),
            exchange,
            period,
            indicators: indicators.iter().copied().collect(),
        }
    }
}

impl From<&AnalysisRequest> for CacheKey {
    fn from(request: &AnalysisRequest) -> Self {
        CacheKey::new(
            &request.symbol,
            request.exchange,
            request.period,
            &request.indicators,
        )
    }
}

#[derive(Debug, Default)]
pub struct AnalysisCache {
    entries: HashMap<CacheKey, AnalysisReport>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<&AnalysisReport> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: CacheKey, report: AnalysisReport) {
        self.entries.insert(key, report);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
