//! Watchlist parsing and validation.
//!
//! Parses symbol lists from configuration or the command line and checks
//! each symbol against the data port before analysis. Symbols with no
//! data are skipped with a warning; thin histories are flagged but kept.

use crate::domain::error::MarketMindError;
use crate::domain::ohlcv::OhlcvBar;
use crate::domain::ticker::{normalize_symbol, Exchange, Period};
use crate::ports::data_port::PriceDataPort;
use std::collections::HashSet;

/// Below this many bars an analysis is allowed but flagged as thin.
pub const MIN_HISTORY_BARS: usize = 10;

#[derive(Debug, Clone, thiserror::Error)]
pub enum WatchlistError {
    #[error("empty token in symbol list")]
    EmptyToken,

    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(String),
}

pub fn parse_symbols(input: &str) -> Result<Vec<String>, WatchlistError> {
    let mut symbols = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        if token.trim().is_empty() {
            return Err(WatchlistError::EmptyToken);
        }
        let symbol = normalize_symbol(token);
        if seen.contains(&symbol) {
            return Err(WatchlistError::DuplicateSymbol(symbol));
        }
        seen.insert(symbol.clone());
        symbols.push(symbol);
    }

    Ok(symbols)
}

#[derive(Debug, Clone)]
pub struct SkippedSymbol {
    pub symbol: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct WatchlistValidation {
    pub symbols: Vec<String>,
    pub skipped: Vec<SkippedSymbol>,
    /// (symbol, bar count) pairs under [`MIN_HISTORY_BARS`]; analysed anyway.
    pub thin: Vec<(String, usize)>,
}

pub fn validate_watchlist(
    data_port: &dyn PriceDataPort,
    symbols: Vec<String>,
    exchange: Exchange,
    period: Period,
) -> Result<WatchlistValidation, MarketMindError> {
    let mut valid = Vec::new();
    let mut skipped = Vec::new();
    let mut thin = Vec::new();

    for symbol in symbols {
        let bars = match data_port.fetch_history(&symbol, exchange, period) {
            Ok(bars) => bars,
            Err(e) => {
                eprintln!("warning: skipping {}.{} ({})", symbol, exchange, e);
                skipped.push(SkippedSymbol {
                    symbol,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if bars.is_empty() {
            eprintln!("warning: skipping {}.{} (no data found)", symbol, exchange);
            skipped.push(SkippedSymbol {
                symbol,
                reason: "no data found".into(),
            });
            continue;
        }

        if bars.len() < MIN_HISTORY_BARS {
            eprintln!(
                "warning: {}.{} has only {} bars; consider a longer period",
                symbol,
                exchange,
                bars.len()
            );
            thin.push((symbol.clone(), bars.len()));
        }

        valid.push(symbol);
    }

    if valid.is_empty() {
        return Err(MarketMindError::NoData {
            symbol: "watchlist".to_string(),
            exchange: exchange.to_string(),
        });
    }

    Ok(WatchlistValidation {
        symbols: valid,
        skipped,
        thin,
    })
}

/// Fetch history for the requested period, widening once via
/// [`Period::fallback`] when the short window comes back empty. Returns
/// the bars and the period actually used.
pub fn fetch_with_fallback(
    data_port: &dyn PriceDataPort,
    symbol: &str,
    exchange: Exchange,
    period: Period,
) -> Result<(Vec<OhlcvBar>, Period), MarketMindError> {
    let bars = data_port.fetch_history(symbol, exchange, period)?;
    if !bars.is_empty() {
        return Ok((bars, period));
    }

    match period.fallback() {
        Some(wider) => {
            let bars = data_port.fetch_history(symbol, exchange, wider)?;
            Ok((bars, wider))
        }
        None => Ok((bars, period)),
    }
}
