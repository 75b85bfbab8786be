//! Narrative generation port trait.

use crate::domain::error::MarketMindError;
use crate::domain::sentiment::SentimentReport;

/// External collaborator producing sentiment and fundamental commentary
/// for a symbol. Failures are non-fatal to an analysis run; callers
/// surface them as warnings and omit the section.
pub trait NarrativePort {
    fn sentiment(&self, symbol: &str) -> Result<SentimentReport, MarketMindError>;

    fn fundamental(&self, symbol: &str) -> Result<String, MarketMindError>;
}
