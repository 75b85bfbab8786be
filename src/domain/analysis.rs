//! Analysis request and report assembly.
//!
//! The core part (indicators + signals) is a pure composition of the
//! indicator engine and the signal detector; narrative sections are
//! filled in by the caller from the narrative port, since those come
//! from an external collaborator and may fail independently.

use crate::domain::indicator::engine::{self, AugmentedSeries};
use crate::domain::indicator::IndicatorSet;
use crate::domain::sentiment::SentimentReport;
use crate::domain::series::PriceSeries;
use crate::domain::signal::{self, SignalReport};
use crate::domain::ticker::{Exchange, Period};

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub symbol: String,
    pub exchange: Exchange,
    pub period: Period,
    pub indicators: IndicatorSet,
    pub with_signals: bool,
    pub with_sentiment: bool,
    pub with_fundamental: bool,
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub augmented: AugmentedSeries,
    pub signals: Option<SignalReport>,
    pub sentiment: Option<SentimentReport>,
    pub fundamental: Option<String>,
}

/// Compute the pure part of a report: indicator columns and, when
/// requested, crossover signals. Narrative sections start out empty.
pub fn build_report(series: PriceSeries, request: &AnalysisRequest) -> AnalysisReport {
    let signals = request.with_signals.then(|| signal::detect(&series));
    let augmented = engine::compute(series, &request.indicators);

    AnalysisReport {
        augmented,
        signals,
        sentiment: None,
        fundamental: None,
    }
}
