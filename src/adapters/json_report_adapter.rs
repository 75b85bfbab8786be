//! JSON report adapter.
//!
//! Flattens an analysis report into serializable row documents; warmup
//! entries serialize as null so consumers need no NaN handling.

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::MarketMindError;
use crate::domain::indicator::{IndicatorKind, IndicatorValue};
use crate::ports::report_port::ReportPort;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ReportDoc {
    symbol: String,
    exchange: String,
    rows: Vec<RowDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signals: Option<SignalsDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment: Option<SentimentDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fundamental: Option<String>,
}

#[derive(Debug, Serialize)]
struct RowDoc {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    ma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bb_upper: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bb_lower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    macd: Option<f64>,
}

#[derive(Debug, Serialize)]
struct SignalsDoc {
    accuracy_pct: f64,
    events: Vec<SignalDoc>,
}

#[derive(Debug, Serialize)]
struct SignalDoc {
    date: String,
    direction: String,
}

#[derive(Debug, Serialize)]
struct SentimentDoc {
    label: String,
    headlines: Vec<String>,
}

pub struct JsonReportAdapter;

impl JsonReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn simple_value(report: &AnalysisReport, kind: IndicatorKind, index: usize) -> Option<f64> {
    let point = &report.augmented.column(kind)?.values[index];
    if !point.valid {
        return None;
    }
    match point.value {
        IndicatorValue::Simple(v) => Some(v),
        IndicatorValue::Bollinger { .. } => None,
    }
}

fn bollinger_value(report: &AnalysisReport, index: usize) -> (Option<f64>, Option<f64>) {
    let Some(column) = report.augmented.column(IndicatorKind::Bollinger) else {
        return (None, None);
    };
    let point = &column.values[index];
    if !point.valid {
        return (None, None);
    }
    match point.value {
        IndicatorValue::Bollinger { upper, lower } => (Some(upper), Some(lower)),
        IndicatorValue::Simple(_) => (None, None),
    }
}

impl ReportPort for JsonReportAdapter {
    fn render(&self, report: &AnalysisReport) -> Result<String, MarketMindError> {
        let series = &report.augmented.series;

        let rows = series
            .bars()
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let (bb_upper, bb_lower) = bollinger_value(report, i);
                RowDoc {
                    date: bar.date.to_string(),
                    open: bar.open,
                    high: bar.high,
                    low: bar.low,
                    close: bar.close,
                    volume: bar.volume,
                    ma: simple_value(report, IndicatorKind::MovingAverage, i),
                    rsi: simple_value(report, IndicatorKind::Rsi, i),
                    bb_upper,
                    bb_lower,
                    macd: simple_value(report, IndicatorKind::Macd, i),
                }
            })
            .collect();

        let doc = ReportDoc {
            symbol: series.symbol.clone(),
            exchange: series.exchange.clone(),
            rows,
            signals: report.signals.as_ref().map(|signals| SignalsDoc {
                accuracy_pct: signals.accuracy_pct,
                events: signals
                    .signals
                    .iter()
                    .map(|s| SignalDoc {
                        date: s.date.to_string(),
                        direction: s.direction.to_string(),
                    })
                    .collect(),
            }),
            sentiment: report.sentiment.as_ref().map(|s| SentimentDoc {
                label: s.label.to_string(),
                headlines: s.headlines.clone(),
            }),
            fundamental: report.fundamental.clone(),
        };

        serde_json::to_string_pretty(&doc).map_err(|e| MarketMindError::Data {
            reason: format!("failed to serialize report: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{build_report, AnalysisRequest};
    use crate::domain::indicator::IndicatorSet;
    use crate::domain::ohlcv::OhlcvBar;
    use crate::domain::series::PriceSeries;
    use crate::domain::ticker::{Exchange, Period};
    use chrono::NaiveDate;

    fn make_report(count: usize, indicators: IndicatorSet) -> AnalysisReport {
        let bars = (0..count)
            .map(|i| OhlcvBar {
                symbol: "INFY".into(),
                exchange: "NSE".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64),
                open: 100.0,
                high: 101.0,
                low: 99.0,
                close: 100.0 + i as f64,
                volume: 1000,
            })
            .collect();
        let series = PriceSeries::from_bars("INFY".into(), "NSE".into(), bars);
        let request = AnalysisRequest {
            symbol: "INFY".into(),
            exchange: Exchange::Nse,
            period: Period::OneYear,
            indicators,
            with_signals: false,
            with_sentiment: false,
            with_fundamental: false,
        };
        build_report(series, &request)
    }

    #[test]
    fn renders_valid_json_with_rows() {
        let report = make_report(25, IndicatorSet::from([IndicatorKind::MovingAverage]));
        let adapter = JsonReportAdapter::new();
        let json = adapter.render(&report).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["symbol"], "INFY");
        assert_eq!(parsed["rows"].as_array().unwrap().len(), 25);
    }

    #[test]
    fn warmup_entries_are_omitted() {
        let report = make_report(25, IndicatorSet::from([IndicatorKind::MovingAverage]));
        let adapter = JsonReportAdapter::new();
        let json = adapter.render(&report).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = parsed["rows"].as_array().unwrap();

        assert!(rows[0].get("ma").is_none());
        assert!(rows[18].get("ma").is_none());
        assert!(rows[19].get("ma").is_some());
    }

    #[test]
    fn bollinger_splits_into_upper_and_lower() {
        let report = make_report(25, IndicatorSet::from([IndicatorKind::Bollinger]));
        let adapter = JsonReportAdapter::new();
        let json = adapter.render(&report).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let row = &parsed["rows"].as_array().unwrap()[24];
        assert!(row.get("bb_upper").is_some());
        assert!(row.get("bb_lower").is_some());
        assert!(
            row["bb_upper"].as_f64().unwrap() > row["bb_lower"].as_f64().unwrap()
        );
    }

    #[test]
    fn absent_sections_are_omitted() {
        let report = make_report(5, IndicatorSet::new());
        let adapter = JsonReportAdapter::new();
        let json = adapter.render(&report).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.get("signals").is_none());
        assert!(parsed.get("sentiment").is_none());
        assert!(parsed.get("fundamental").is_none());
    }
}
