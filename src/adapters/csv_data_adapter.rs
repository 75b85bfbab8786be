//! CSV file price-data adapter.
//!
//! Serves `<SYMBOL>_<EXCHANGE>.csv` files from a base directory, header
//! `date,open,high,low,close,volume` with `%Y-%m-%d` dates. The period
//! cutoff is applied against the newest date in the file.

use crate::domain::error::MarketMindError;
use crate::domain::ohlcv::OhlcvBar;
use crate::domain::ticker::{Exchange, Period};
use crate::ports::data_port::PriceDataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvDataAdapter {
    base_path: PathBuf,
}

impl CsvDataAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str, exchange: Exchange) -> PathBuf {
        self.base_path.join(format!("{}_{}.csv", symbol, exchange))
    }

    fn read_all_bars(
        &self,
        symbol: &str,
        exchange: Exchange,
    ) -> Result<Vec<OhlcvBar>, MarketMindError> {
        let path = self.csv_path(symbol, exchange);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(MarketMindError::NoData {
                    symbol: symbol.to_string(),
                    exchange: exchange.to_string(),
                });
            }
            Err(e) => {
                return Err(MarketMindError::Data {
                    reason: format!("failed to read {}: {}", path.display(), e),
                });
            }
        };

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| MarketMindError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| MarketMindError::Data {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                MarketMindError::Data {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            let bar = OhlcvBar {
                symbol: symbol.to_string(),
                exchange: exchange.to_string(),
                date,
                open: parse_field(&record, 1, "open")?,
                high: parse_field(&record, 2, "high")?,
                low: parse_field(&record, 3, "low")?,
                close: parse_field(&record, 4, "close")?,
                volume: parse_volume(&record, 5)?,
            };

            if !bar.is_well_formed() {
                return Err(MarketMindError::Data {
                    reason: format!("malformed bar on {}: negative or non-finite field", date),
                });
            }

            bars.push(bar);
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }
}

fn parse_field(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<f64, MarketMindError> {
    record
        .get(index)
        .ok_or_else(|| MarketMindError::Data {
            reason: format!("missing {} column", name),
        })?
        .parse()
        .map_err(|e| MarketMindError::Data {
            reason: format!("invalid {} value: {}", name, e),
        })
}

fn parse_volume(record: &csv::StringRecord, index: usize) -> Result<i64, MarketMindError> {
    record
        .get(index)
        .ok_or_else(|| MarketMindError::Data {
            reason: "missing volume column".into(),
        })?
        .parse()
        .map_err(|e| MarketMindError::Data {
            reason: format!("invalid volume value: {}", e),
        })
}

impl PriceDataPort for CsvDataAdapter {
    fn fetch_history(
        &self,
        symbol: &str,
        exchange: Exchange,
        period: Period,
    ) -> Result<Vec<OhlcvBar>, MarketMindError> {
        let bars = self.read_all_bars(symbol, exchange)?;

        let Some(last) = bars.last().map(|b| b.date) else {
            return Ok(bars);
        };

        match period.cutoff(last) {
            Some(cutoff) => Ok(bars.into_iter().filter(|b| b.date >= cutoff).collect()),
            None => Ok(bars),
        }
    }

    fn list_symbols(&self, exchange: Exchange) -> Result<Vec<String>, MarketMindError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| MarketMindError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let suffix = format!("_{}.csv", exchange);
        let mut symbols = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| MarketMindError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if name_str.ends_with(&suffix) {
                let symbol = &name_str[..name_str.len() - suffix.len()];
                symbols.push(symbol.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }

    fn data_range(
        &self,
        symbol: &str,
        exchange: Exchange,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, MarketMindError> {
        let bars = match self.read_all_bars(symbol, exchange) {
            Ok(bars) => bars,
            Err(MarketMindError::NoData { .. }) => return Ok(None),
            Err(e) => return Err(e),
        };

        match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, bars.len()))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_data() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();

        let csv_content = "date,open,high,low,close,volume\n\
            2024-01-15,100.0,110.0,90.0,105.0,50000\n\
            2024-01-16,105.0,115.0,100.0,110.0,60000\n\
            2024-01-17,110.0,120.0,105.0,115.0,55000\n";

        fs::write(path.join("RELIANCE_NSE.csv"), csv_content).unwrap();
        fs::write(
            path.join("TCS_NSE.csv"),
            "date,open,high,low,close,volume\n",
        )
        .unwrap();
        fs::write(
            path.join("SENSEXCO_BSE.csv"),
            "date,open,high,low,close,volume\n",
        )
        .unwrap();

        (dir, path)
    }

    #[test]
    fn fetch_history_returns_parsed_bars() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvDataAdapter::new(path);

        let bars = adapter
            .fetch_history("RELIANCE", Exchange::Nse, Period::Max)
            .unwrap();

        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(bars[0].open, 100.0);
        assert_eq!(bars[0].high, 110.0);
        assert_eq!(bars[0].low, 90.0);
        assert_eq!(bars[0].close, 105.0);
        assert_eq!(bars[0].volume, 50000);
        assert_eq!(bars[0].symbol, "RELIANCE");
        assert_eq!(bars[0].exchange, "NSE");
    }

    #[test]
    fn fetch_history_sorts_unsorted_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();
        fs::write(
            path.join("INFY_NSE.csv"),
            "date,open,high,low,close,volume\n\
             2024-01-17,1.0,2.0,0.5,1.5,10\n\
             2024-01-15,1.0,2.0,0.5,1.5,10\n",
        )
        .unwrap();

        let adapter = CsvDataAdapter::new(path);
        let bars = adapter
            .fetch_history("INFY", Exchange::Nse, Period::Max)
            .unwrap();

        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(bars[1].date, NaiveDate::from_ymd_opt(2024, 1, 17).unwrap());
    }

    #[test]
    fn fetch_history_applies_period_cutoff() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();

        let mut content = String::from("date,open,high,low,close,volume\n");
        // Two years of month-start bars ending 2024-12-01.
        for year in [2023, 2024] {
            for month in 1..=12 {
                content.push_str(&format!("{}-{:02}-01,1.0,2.0,0.5,1.5,10\n", year, month));
            }
        }
        fs::write(path.join("SBIN_NSE.csv"), content).unwrap();

        let adapter = CsvDataAdapter::new(path);

        let all = adapter
            .fetch_history("SBIN", Exchange::Nse, Period::Max)
            .unwrap();
        assert_eq!(all.len(), 24);

        let six_months = adapter
            .fetch_history("SBIN", Exchange::Nse, Period::SixMonths)
            .unwrap();
        assert_eq!(six_months.len(), 7);
        assert_eq!(
            six_months[0].date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );

        let one_year = adapter
            .fetch_history("SBIN", Exchange::Nse, Period::OneYear)
            .unwrap();
        assert_eq!(one_year.len(), 13);
    }

    #[test]
    fn fetch_history_missing_file_is_no_data() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvDataAdapter::new(path);

        let result = adapter.fetch_history("UNKNOWN", Exchange::Nse, Period::Max);
        assert!(matches!(result, Err(MarketMindError::NoData { .. })));
    }

    #[test]
    fn fetch_history_rejects_malformed_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();
        fs::write(
            path.join("BAD_NSE.csv"),
            "date,open,high,low,close,volume\n2024-01-15,-1.0,2.0,0.5,1.5,10\n",
        )
        .unwrap();

        let adapter = CsvDataAdapter::new(path);
        let result = adapter.fetch_history("BAD", Exchange::Nse, Period::Max);
        assert!(matches!(result, Err(MarketMindError::Data { .. })));
    }

    #[test]
    fn list_symbols_per_exchange() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvDataAdapter::new(path);

        assert_eq!(
            adapter.list_symbols(Exchange::Nse).unwrap(),
            vec!["RELIANCE", "TCS"]
        );
        assert_eq!(
            adapter.list_symbols(Exchange::Bse).unwrap(),
            vec!["SENSEXCO"]
        );
    }

    #[test]
    fn data_range_reports_bounds_and_count() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvDataAdapter::new(path);

        let range = adapter.data_range("RELIANCE", Exchange::Nse).unwrap();
        assert_eq!(
            range,
            Some((
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 17).unwrap(),
                3
            ))
        );

        assert_eq!(adapter.data_range("TCS", Exchange::Nse).unwrap(), None);
        assert_eq!(adapter.data_range("UNKNOWN", Exchange::Nse).unwrap(), None);
    }
}
