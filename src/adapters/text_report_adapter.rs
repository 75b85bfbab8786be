//! Plain-text report adapter.
//!
//! Renders an analysis report for the terminal: signal list, narrative
//! sections, and a tail of the augmented series as a fixed-width table.
//! Warmup entries render as `-`.

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::MarketMindError;
use crate::domain::indicator::{IndicatorKind, IndicatorValue};
use crate::ports::report_port::ReportPort;
use std::fmt::Write;

/// Rows of the augmented series shown at the end of the report.
pub const TAIL_ROWS: usize = 10;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn fmt_cell(valid: bool, value: f64) -> String {
    if valid && value.is_finite() {
        format!("{:.2}", value)
    } else {
        "-".to_string()
    }
}

impl ReportPort for TextReportAdapter {
    fn render(&self, report: &AnalysisReport) -> Result<String, MarketMindError> {
        let series = &report.augmented.series;
        let mut out = String::new();

        writeln!(out, "=== {} on {} ===", series.symbol, series.exchange).ok();

        if let Some(signals) = &report.signals {
            writeln!(out, "\nTrading Signals").ok();
            if signals.is_empty() {
                writeln!(out, "  No trading signals generated.").ok();
            } else {
                for signal in &signals.signals {
                    writeln!(
                        out,
                        "  {:<4} {} (accuracy {:.2}%)",
                        signal.direction.to_string(),
                        signal.date,
                        signals.accuracy_pct
                    )
                    .ok();
                }
            }
        }

        if let Some(sentiment) = &report.sentiment {
            writeln!(out, "\nSentiment Analysis").ok();
            writeln!(out, "  Sentiment: {}", sentiment.label).ok();
            for headline in &sentiment.headlines {
                writeln!(out, "  - {}", headline).ok();
            }
        }

        if let Some(fundamental) = &report.fundamental {
            writeln!(out, "\nFundamental Analysis").ok();
            for line in fundamental.lines() {
                writeln!(out, "  {}", line).ok();
            }
        }

        if !series.is_empty() {
            writeln!(out, "\nHistorical Data (last {} bars)", TAIL_ROWS).ok();

            let mut header = format!(
                "  {:<12} {:>10} {:>10} {:>10} {:>10} {:>12}",
                "date", "open", "high", "low", "close", "volume"
            );
            for kind in report.augmented.columns.keys() {
                match kind {
                    IndicatorKind::Bollinger => {
                        write!(header, " {:>10} {:>10}", "BB_UPPER", "BB_LOWER").ok();
                    }
                    other => {
                        write!(header, " {:>10}", other.to_string()).ok();
                    }
                }
            }
            writeln!(out, "{}", header).ok();

            let start = series.bar_count().saturating_sub(TAIL_ROWS);
            for (offset, bar) in series.bars()[start..].iter().enumerate() {
                let i = start + offset;
                let mut row = format!(
                    "  {:<12} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12}",
                    bar.date.to_string(),
                    bar.open,
                    bar.high,
                    bar.low,
                    bar.close,
                    bar.volume
                );
                for column in report.augmented.columns.values() {
                    let point = &column.values[i];
                    match point.value {
                        IndicatorValue::Simple(v) => {
                            write!(row, " {:>10}", fmt_cell(point.valid, v)).ok();
                        }
                        IndicatorValue::Bollinger { upper, lower } => {
                            write!(
                                row,
                                " {:>10} {:>10}",
                                fmt_cell(point.valid, upper),
                                fmt_cell(point.valid, lower)
                            )
                            .ok();
                        }
                    }
                }
                writeln!(out, "{}", row).ok();
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{build_report, AnalysisRequest};
    use crate::domain::indicator::IndicatorSet;
    use crate::domain::ohlcv::OhlcvBar;
    use crate::domain::sentiment::{SentimentLabel, SentimentReport};
    use crate::domain::series::PriceSeries;
    use crate::domain::ticker::{Exchange, Period};
    use chrono::NaiveDate;

    fn make_series(count: usize) -> PriceSeries {
        let bars = (0..count)
            .map(|i| OhlcvBar {
                symbol: "TCS".into(),
                exchange: "NSE".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64),
                open: 100.0,
                high: 101.0,
                low: 99.0,
                close: 100.0,
                volume: 1000,
            })
            .collect();
        PriceSeries::from_bars("TCS".into(), "NSE".into(), bars)
    }

    fn make_report(count: usize, indicators: IndicatorSet) -> AnalysisReport {
        let request = AnalysisRequest {
            symbol: "TCS".into(),
            exchange: Exchange::Nse,
            period: Period::OneYear,
            indicators,
            with_signals: true,
            with_sentiment: false,
            with_fundamental: false,
        };
        build_report(make_series(count), &request)
    }

    #[test]
    fn render_includes_header_and_tail() {
        let report = make_report(30, IndicatorSet::from([IndicatorKind::MovingAverage]));
        let adapter = TextReportAdapter::new();
        let text = adapter.render(&report).unwrap();

        assert!(text.contains("=== TCS on NSE ==="));
        assert!(text.contains("Historical Data"));
        assert!(text.contains("MA"));
        // 30 flat bars: under the signal guard, so no signals.
        assert!(text.contains("No trading signals generated."));
    }

    #[test]
    fn warmup_cells_render_as_dash() {
        let report = make_report(5, IndicatorSet::from([IndicatorKind::MovingAverage]));
        let adapter = TextReportAdapter::new();
        let text = adapter.render(&report).unwrap();

        // All 5 bars are inside the 20-bar warmup.
        assert!(text.contains(" -"));
    }

    #[test]
    fn bollinger_renders_two_columns() {
        let report = make_report(25, IndicatorSet::from([IndicatorKind::Bollinger]));
        let adapter = TextReportAdapter::new();
        let text = adapter.render(&report).unwrap();

        assert!(text.contains("BB_UPPER"));
        assert!(text.contains("BB_LOWER"));
    }

    #[test]
    fn narrative_sections_rendered_when_present() {
        let mut report = make_report(10, IndicatorSet::new());
        report.sentiment = Some(SentimentReport {
            symbol: "TCS".into(),
            label: SentimentLabel::Positive,
            headlines: vec!["TCS rallies on strong results.".into()],
        });
        report.fundamental = Some("- **Revenue Growth**: steady.".into());

        let adapter = TextReportAdapter::new();
        let text = adapter.render(&report).unwrap();

        assert!(text.contains("Sentiment: Positive"));
        assert!(text.contains("TCS rallies on strong results."));
        assert!(text.contains("**Revenue Growth**"));
    }

    #[test]
    fn empty_series_renders_header_only_table() {
        let report = make_report(0, IndicatorSet::from([IndicatorKind::MovingAverage]));
        let adapter = TextReportAdapter::new();
        let text = adapter.render(&report).unwrap();

        assert!(text.contains("=== TCS on NSE ==="));
        assert!(!text.contains("Historical Data"));
    }
}
