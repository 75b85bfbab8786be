//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::canned_narrative_adapter::CannedNarrativeAdapter;
use crate::adapters::csv_data_adapter::CsvDataAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::analysis::{build_report, AnalysisRequest};
use crate::domain::cache::{AnalysisCache, CacheKey};
use crate::domain::config_validation::validate_analysis_config;
use crate::domain::error::MarketMindError;
use crate::domain::indicator::{parse_indicator_set, IndicatorSet};
use crate::domain::series::PriceSeries;
use crate::domain::ticker::{Exchange, Period};
use crate::domain::watchlist::{self, fetch_with_fallback, parse_symbols};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::PriceDataPort;
use crate::ports::narrative_port::NarrativePort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "marketmind", about = "Equity indicator and crossover-signal analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze symbols: indicators, signals, commentary
    Analyze {
        #[arg(short, long)]
        config: PathBuf,
        /// Comma-separated symbol list (overrides config)
        #[arg(long)]
        symbols: Option<String>,
        #[arg(long)]
        exchange: Option<String>,
        #[arg(long)]
        period: Option<String>,
        /// Comma-separated indicators: ma, rsi, bollinger, macd
        #[arg(long)]
        indicators: Option<String>,
        /// Include crossover signals
        #[arg(long)]
        signals: bool,
        /// Include sentiment commentary
        #[arg(long)]
        sentiment: bool,
        /// Include fundamental commentary
        #[arg(long)]
        fundamental: bool,
        /// Report format: text or json
        #[arg(long, default_value = "text")]
        format: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available symbols on an exchange
    ListSymbols {
        #[arg(long)]
        exchange: String,
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show data range for symbol(s)
    Info {
        #[arg(long)]
        symbols: Option<String>,
        #[arg(long)]
        exchange: Option<String>,
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate an analysis configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Analyze {
            config,
            symbols,
            exchange,
            period,
            indicators,
            signals,
            sentiment,
            fundamental,
            format,
            output,
        } => run_analyze(AnalyzeArgs {
            config_path: config,
            symbols,
            exchange,
            period,
            indicators,
            signals,
            sentiment,
            fundamental,
            format,
            output,
        }),
        Command::ListSymbols { exchange, config } => run_list_symbols(&exchange, &config),
        Command::Info {
            symbols,
            exchange,
            config,
        } => run_info(symbols.as_deref(), exchange.as_deref(), &config),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = MarketMindError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

struct AnalyzeArgs {
    config_path: PathBuf,
    symbols: Option<String>,
    exchange: Option<String>,
    period: Option<String>,
    indicators: Option<String>,
    signals: bool,
    sentiment: bool,
    fundamental: bool,
    format: String,
    output: Option<PathBuf>,
}

fn run_analyze(args: AnalyzeArgs) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", args.config_path.display());
    let config = match load_config(&args.config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = validate_analysis_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: Resolve request parameters
    let exchange = match resolve_exchange(args.exchange.as_deref(), &config) {
        Ok(e) => e,
        Err(code) => return code,
    };
    let period = match resolve_period(args.period.as_deref(), &config) {
        Ok(p) => p,
        Err(code) => return code,
    };
    let indicators = match resolve_indicators(args.indicators.as_deref(), &config) {
        Ok(i) => i,
        Err(code) => return code,
    };

    let with_signals = args.signals || config.get_bool("analysis", "show_signals", true);
    let with_sentiment = args.sentiment || config.get_bool("analysis", "show_sentiment", false);
    let with_fundamental =
        args.fundamental || config.get_bool("analysis", "show_fundamental", false);

    let symbols_str = match args
        .symbols
        .or_else(|| config.get_string("analysis", "symbols"))
    {
        Some(s) => s,
        None => {
            eprintln!("error: no symbols given (use --symbols or set [analysis] symbols)");
            return ExitCode::from(2);
        }
    };
    let symbols = match parse_symbols(&symbols_str) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let report_adapter: Box<dyn ReportPort> = match args.format.as_str() {
        "text" => Box::new(TextReportAdapter::new()),
        "json" => Box::new(JsonReportAdapter::new()),
        other => {
            eprintln!("error: unknown format '{}' (expected text or json)", other);
            return ExitCode::from(2);
        }
    };

    // Stage 3: Validate watchlist against the data port
    let csv_path = match config.get_string("data", "csv_path") {
        Some(p) => p,
        None => {
            let err = MarketMindError::ConfigMissing {
                section: "data".into(),
                key: "csv_path".into(),
            };
            eprintln!("error: {err}");
            return (&err).into();
        }
    };
    let data_port = CsvDataAdapter::new(PathBuf::from(csv_path));

    eprintln!("Validating {} symbols on {}...", symbols.len(), exchange);
    let validation = match watchlist::validate_watchlist(&data_port, symbols, exchange, period) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 4: Analyze each symbol
    let narrative_port = CannedNarrativeAdapter::new();
    let mut cache = AnalysisCache::new();
    let mut rendered = Vec::with_capacity(validation.symbols.len());

    for symbol in &validation.symbols {
        eprintln!("Analyzing {} ({})...", exchange.provider_ticker(symbol), period);
        let request = AnalysisRequest {
            symbol: symbol.clone(),
            exchange,
            period,
            indicators: indicators.clone(),
            with_signals,
            with_sentiment,
            with_fundamental,
        };
        let key = CacheKey::from(&request);

        let report = match cache.get(&key).cloned() {
            Some(cached) => cached,
            None => {
                let (bars, used_period) =
                    match fetch_with_fallback(&data_port, symbol, exchange, period) {
                        Ok(fetched) => fetched,
                        Err(e) => {
                            eprintln!("warning: skipping {} ({})", symbol, e);
                            continue;
                        }
                    };
                if used_period != period {
                    eprintln!(
                        "  {}: no data for {}, widened to {}",
                        symbol, period, used_period
                    );
                }

                let series =
                    PriceSeries::from_bars(symbol.clone(), exchange.to_string(), bars);
                let mut report = build_report(series, &request);

                if with_sentiment {
                    match narrative_port.sentiment(symbol) {
                        Ok(s) => report.sentiment = Some(s),
                        Err(e) => eprintln!("warning: sentiment unavailable for {symbol} ({e})"),
                    }
                }
                if with_fundamental {
                    match narrative_port.fundamental(symbol) {
                        Ok(f) => report.fundamental = Some(f),
                        Err(e) => {
                            eprintln!("warning: fundamentals unavailable for {symbol} ({e})")
                        }
                    }
                }

                cache.insert(key, report.clone());
                report
            }
        };

        // Stage 5: Console summary
        let bar_count = report.augmented.series.bar_count();
        match &report.signals {
            Some(signals) => eprintln!(
                "  {}: {} bars, {} signals, accuracy {:.2}%",
                symbol,
                bar_count,
                signals.signals.len(),
                signals.accuracy_pct
            ),
            None => eprintln!("  {}: {} bars", symbol, bar_count),
        }

        match report_adapter.render(&report) {
            Ok(text) => rendered.push(text),
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    }

    if rendered.is_empty() {
        eprintln!("error: no symbols could be analyzed");
        return ExitCode::from(5);
    }

    // Stage 6: Emit reports
    let combined = rendered.join("\n");
    match args.output {
        Some(path) => match fs::write(&path, &combined) {
            Ok(()) => {
                eprintln!("\nReport written to: {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: failed to write report: {e}");
                ExitCode::from(1)
            }
        },
        None => {
            println!("{}", combined);
            ExitCode::SUCCESS
        }
    }
}

fn resolve_exchange(
    flag: Option<&str>,
    config: &dyn ConfigPort,
) -> Result<Exchange, ExitCode> {
    let value = flag
        .map(str::to_string)
        .or_else(|| config.get_string("analysis", "exchange"))
        .unwrap_or_else(|| "NSE".to_string());

    value.parse().map_err(|reason: String| {
        eprintln!("error: {reason}");
        ExitCode::from(2)
    })
}

fn resolve_period(flag: Option<&str>, config: &dyn ConfigPort) -> Result<Period, ExitCode> {
    let value = flag
        .map(str::to_string)
        .or_else(|| config.get_string("analysis", "period"))
        .unwrap_or_else(|| "1y".to_string());

    value.parse().map_err(|reason: String| {
        eprintln!("error: {reason}");
        ExitCode::from(2)
    })
}

fn resolve_indicators(
    flag: Option<&str>,
    config: &dyn ConfigPort,
) -> Result<IndicatorSet, ExitCode> {
    let value = flag
        .map(str::to_string)
        .or_else(|| config.get_string("analysis", "indicators"))
        .unwrap_or_else(|| "ma".to_string());

    parse_indicator_set(&value).map_err(|reason| {
        eprintln!("error: {reason}");
        ExitCode::from(2)
    })
}

fn run_list_symbols(exchange: &str, config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let exchange: Exchange = match exchange.parse() {
        Ok(e) => e,
        Err(reason) => {
            eprintln!("error: {reason}");
            return ExitCode::from(2);
        }
    };

    let csv_path = match config.get_string("data", "csv_path") {
        Some(p) => p,
        None => {
            let err = MarketMindError::ConfigMissing {
                section: "data".into(),
                key: "csv_path".into(),
            };
            eprintln!("error: {err}");
            return (&err).into();
        }
    };
    let data_port = CsvDataAdapter::new(PathBuf::from(csv_path));

    let symbols = match data_port.list_symbols(exchange) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if symbols.is_empty() {
        eprintln!("No symbols found for exchange {}", exchange);
    } else {
        for symbol in &symbols {
            println!("{}", symbol);
        }
        eprintln!("{} symbols found", symbols.len());
    }
    ExitCode::SUCCESS
}

fn run_info(symbols: Option<&str>, exchange: Option<&str>, config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let exchange = match resolve_exchange(exchange, &config) {
        Ok(e) => e,
        Err(code) => return code,
    };

    let symbols_str = match symbols
        .map(str::to_string)
        .or_else(|| config.get_string("analysis", "symbols"))
    {
        Some(s) => s,
        None => {
            eprintln!("error: no symbols given (use --symbols or set [analysis] symbols)");
            return ExitCode::from(2);
        }
    };
    let symbols = match parse_symbols(&symbols_str) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let csv_path = match config.get_string("data", "csv_path") {
        Some(p) => p,
        None => {
            let err = MarketMindError::ConfigMissing {
                section: "data".into(),
                key: "csv_path".into(),
            };
            eprintln!("error: {err}");
            return (&err).into();
        }
    };
    let data_port = CsvDataAdapter::new(PathBuf::from(csv_path));

    for symbol in &symbols {
        match data_port.data_range(symbol, exchange) {
            Ok(Some((min_date, max_date, count))) => {
                println!(
                    "{}.{}: {} bars, {} to {}",
                    symbol, exchange, count, min_date, max_date
                );
            }
            Ok(None) => {
                eprintln!("{}.{}: no data found", symbol, exchange);
            }
            Err(e) => {
                eprintln!("error querying {}.{}: {}", symbol, exchange, e);
            }
        }
    }
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = validate_analysis_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    if let Some(symbols) = config.get_string("analysis", "symbols") {
        match parse_symbols(&symbols) {
            Ok(parsed) => eprintln!("  symbols: {}", parsed.join(", ")),
            Err(e) => {
                eprintln!("error: failed to parse symbols: {e}");
                return ExitCode::from(2);
            }
        }
    }

    eprintln!("Config validated successfully");
    ExitCode::SUCCESS
}
