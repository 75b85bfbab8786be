//! Symbol, exchange, and period handling.
//!
//! The upstream provider addresses Indian listings by a suffixed ticker:
//! NSE symbols as `SYMBOL.NS`, BSE symbols as `SYMBOL.BO`. Periods map to
//! a date cutoff relative to the newest available bar; `1mo` falls back
//! to `1y` when the short window yields nothing.

use chrono::{Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exchange {
    Nse,
    Bse,
}

impl Exchange {
    /// Provider ticker suffix for this exchange.
    pub fn suffix(&self) -> &'static str {
        match self {
            Exchange::Nse => ".NS",
            Exchange::Bse => ".BO",
        }
    }

    /// Full provider ticker for a normalized symbol, e.g. `RELIANCE.NS`.
    pub fn provider_ticker(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.suffix())
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exchange::Nse => write!(f, "NSE"),
            Exchange::Bse => write!(f, "BSE"),
        }
    }
}

impl FromStr for Exchange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nse" => Ok(Exchange::Nse),
            "bse" => Ok(Exchange::Bse),
            other => Err(format!("unknown exchange '{}' (expected NSE or BSE)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    OneMonth,
    SixMonths,
    OneYear,
    FiveYears,
    Max,
}

impl Period {
    /// Earliest date included when the newest bar is `last`. `None` means
    /// no cutoff (the full history).
    pub fn cutoff(&self, last: NaiveDate) -> Option<NaiveDate> {
        let months = match self {
            Period::OneMonth => 1,
            Period::SixMonths => 6,
            Period::OneYear => 12,
            Period::FiveYears => 60,
            Period::Max => return None,
        };
        Some(last.checked_sub_months(Months::new(months)).unwrap_or(last))
    }

    /// A wider period retried when this one yields no usable data.
    pub fn fallback(&self) -> Option<Period> {
        match self {
            Period::OneMonth => Some(Period::OneYear),
            _ => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::OneMonth => "1mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::FiveYears => "5y",
            Period::Max => "max",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1mo" => Ok(Period::OneMonth),
            "6mo" => Ok(Period::SixMonths),
            "1y" => Ok(Period::OneYear),
            "5y" => Ok(Period::FiveYears),
            "max" => Ok(Period::Max),
            other => Err(format!(
                "unknown period '{}' (expected 1mo, 6mo, 1y, 5y or max)",
                other
            )),
        }
    }
}

/// Normalize user symbol input: trim, strip `$` prefixes, uppercase.
pub fn normalize_symbol(input: &str) -> String {
    input.trim().replace('$', "").to_uppercase()
}
