//! Price-history access port trait.

use crate::domain::error::MarketMindError;
use crate::domain::ohlcv::OhlcvBar;
use crate::domain::ticker::{Exchange, Period};
use chrono::NaiveDate;

/// The price series provider: an external collaborator that returns
/// OHLCV bars for a listed symbol over a period, or a fetch failure.
pub trait PriceDataPort {
    fn fetch_history(
        &self,
        symbol: &str,
        exchange: Exchange,
        period: Period,
    ) -> Result<Vec<OhlcvBar>, MarketMindError>;

    fn list_symbols(&self, exchange: Exchange) -> Result<Vec<String>, MarketMindError>;

    fn data_range(
        &self,
        symbol: &str,
        exchange: Exchange,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, MarketMindError>;
}
