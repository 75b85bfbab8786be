//! Domain error types.

/// Top-level error type for marketmind.
///
/// The pure core (indicator engine, signal detector) never returns
/// errors on well-typed input; these variants cover the boundary —
/// configuration, data access, and narrative collaborators.
#[derive(Debug, thiserror::Error)]
pub enum MarketMindError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no data for {symbol} on {exchange}")]
    NoData { symbol: String, exchange: String },

    #[error("insufficient history for {symbol} on {exchange}: have {bars} bars, need {minimum}")]
    InsufficientHistory {
        symbol: String,
        exchange: String,
        bars: usize,
        minimum: usize,
    },

    #[error("narrative generation failed: {reason}")]
    Narrative { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&MarketMindError> for std::process::ExitCode {
    fn from(err: &MarketMindError) -> Self {
        let code: u8 = match err {
            MarketMindError::Io(_) => 1,
            MarketMindError::ConfigParse { .. }
            | MarketMindError::ConfigMissing { .. }
            | MarketMindError::ConfigInvalid { .. } => 2,
            MarketMindError::Data { .. } | MarketMindError::Narrative { .. } => 3,
            MarketMindError::NoData { .. } | MarketMindError::InsufficientHistory { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
