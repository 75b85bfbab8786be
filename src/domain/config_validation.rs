//! Configuration validation.
//!
//! Validates config fields before an analysis run so failures surface
//! up front with a config exit code rather than mid-pipeline.

use crate::domain::error::MarketMindError;
use crate::domain::indicator::parse_indicator_set;
use crate::domain::ticker::{Exchange, Period};
use crate::ports::config_port::ConfigPort;

pub fn validate_analysis_config(config: &dyn ConfigPort) -> Result<(), MarketMindError> {
    validate_csv_path(config)?;
    validate_exchange(config)?;
    validate_period(config)?;
    validate_indicators(config)?;
    Ok(())
}

fn validate_csv_path(config: &dyn ConfigPort) -> Result<(), MarketMindError> {
    match config.get_string("data", "csv_path") {
        Some(path) if !path.trim().is_empty() => Ok(()),
        Some(_) => Err(MarketMindError::ConfigInvalid {
            section: "data".to_string(),
            key: "csv_path".to_string(),
            reason: "csv_path must not be empty".to_string(),
        }),
        None => Err(MarketMindError::ConfigMissing {
            section: "data".to_string(),
            key: "csv_path".to_string(),
        }),
    }
}

fn validate_exchange(config: &dyn ConfigPort) -> Result<(), MarketMindError> {
    if let Some(value) = config.get_string("analysis", "exchange") {
        value
            .parse::<Exchange>()
            .map_err(|reason| MarketMindError::ConfigInvalid {
                section: "analysis".to_string(),
                key: "exchange".to_string(),
                reason,
            })?;
    }
    Ok(())
}

fn validate_period(config: &dyn ConfigPort) -> Result<(), MarketMindError> {
    if let Some(value) = config.get_string("analysis", "period") {
        value
            .parse::<Period>()
            .map_err(|reason| MarketMindError::ConfigInvalid {
                section: "analysis".to_string(),
                key: "period".to_string(),
                reason,
            })?;
    }
    Ok(())
}

fn validate_indicators(config: &dyn ConfigPort) -> Result<(), MarketMindError> {
    if let Some(value) = config.get_string("analysis", "indicators") {
        parse_indicator_set(&value).map_err(|reason| MarketMindError::ConfigInvalid {
            section: "analysis".to_string(),
            key: "indicators".to_string(),
            reason,
        })?;
    }
    Ok(())
}
