//! Stockcast CLI: price history, moving averages and model predictions.
//!
//! Commands:
//! - `predict`: validate a selection, load history, fetch a prediction, print the dashboard
//! - `history`: print recent closes with 50/200-day moving averages
//! - `export`: write closes and moving averages as CSV
//! - `symbols`: list configured tickers and their files

mod export;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use stockcast_core::dashboard::{format_price, Dashboard, DashboardView};
use stockcast_core::data::{CsvLoader, PriceSource, PriceStore};
use stockcast_core::domain::TickerSeries;
use stockcast_core::indicators::MovingAverages;
use stockcast_core::StockcastConfig;

#[derive(Parser)]
#[command(
    name = "stockcast",
    about = "Stockcast CLI: stock price history and model predictions"
)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a closing price and show the dashboard summary.
    Predict {
        /// Ticker symbol (e.g., tcs, infosys).
        #[arg(long, default_value = "")]
        stock: String,

        /// Model id: lr, dt, or rf.
        #[arg(long, default_value = "")]
        model: String,

        /// Prediction date (YYYY-MM-DD).
        #[arg(long, default_value = "")]
        date: String,

        /// Print the full dashboard view as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print recent closes with 50- and 200-day moving averages.
    History {
        #[arg(long)]
        stock: String,

        /// Number of most recent rows to show.
        #[arg(long, default_value_t = 10)]
        tail: usize,
    },
    /// Export closes and moving averages as CSV.
    Export {
        #[arg(long)]
        stock: String,

        /// Output file path.
        #[arg(long)]
        out: PathBuf,
    },
    /// List configured ticker symbols.
    Symbols,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => StockcastConfig::from_file(path)?,
        None => StockcastConfig::default(),
    };

    match cli.command {
        Commands::Predict {
            stock,
            model,
            date,
            json,
        } => run_predict(&config, &stock, &model, &date, json),
        Commands::History { stock, tail } => run_history(&config, &stock, tail),
        Commands::Export { stock, out } => run_export(&config, &stock, &out),
        Commands::Symbols => run_symbols(&config),
    }
}

fn run_predict(
    config: &StockcastConfig,
    stock: &str,
    model: &str,
    date: &str,
    json: bool,
) -> Result<()> {
    let source = config.price_source()?;
    let predictor = config.prediction_client()?;
    let loader = CsvLoader::new(&config.symbols, source.as_ref()).with_policy(config.data.policy);
    let dashboard = Dashboard::new(loader, &predictor);
    let mut store = PriceStore::new();

    let view = match dashboard.run(&mut store, stock, model, date) {
        Ok(view) => view,
        Err(e) => {
            log::error!("predict failed: {e}");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_dashboard(&view);
    }
    Ok(())
}

fn run_history(config: &StockcastConfig, stock: &str, tail: usize) -> Result<()> {
    let source = config.price_source()?;
    let series = load_one(config, source.as_ref(), stock)?;
    let ma = MovingAverages::from_series(&series);

    println!("{}: {} rows", series.symbol.to_uppercase(), series.len());
    if series.has_diagnostics() {
        println!(
            "WARNING: {} malformed row(s) skipped",
            series.diagnostics.len()
        );
    }
    println!();
    print_rows(&series, &ma, tail);
    Ok(())
}

fn run_export(config: &StockcastConfig, stock: &str, out: &Path) -> Result<()> {
    let source = config.price_source()?;
    let series = load_one(config, source.as_ref(), stock)?;
    let ma = MovingAverages::from_series(&series);

    let csv = export::export_series_csv(&series, &ma)?;
    std::fs::write(out, csv).with_context(|| format!("failed to write {}", out.display()))?;
    println!("Exported {} rows to {}", series.len(), out.display());
    Ok(())
}

fn run_symbols(config: &StockcastConfig) -> Result<()> {
    if config.symbols.is_empty() {
        println!("No symbols configured.");
        return Ok(());
    }

    println!("{:<10} {:<16}", "Symbol", "File");
    println!("{}", "-".repeat(27));
    for (symbol, file) in config.symbols.iter() {
        println!("{:<10} {:<16}", symbol, file);
    }
    Ok(())
}

fn load_one(
    config: &StockcastConfig,
    source: &dyn PriceSource,
    stock: &str,
) -> Result<std::sync::Arc<TickerSeries>> {
    let loader = CsvLoader::new(&config.symbols, source).with_policy(config.data.policy);
    let mut store = PriceStore::new();
    loader
        .load(&mut store, stock)
        .with_context(|| format!("failed to load price history for '{stock}'"))
}

fn print_dashboard(view: &DashboardView) {
    let s = &view.summary;
    println!();
    println!("=== Prediction ===");
    println!("Stock:       {}", s.stock);
    println!("Model:       {}", s.model);
    println!("Date:        {}", s.date);
    println!("Prediction:  {}", s.prediction);
    println!("Confidence:  {}", s.confidence);
    println!();

    let chart = &view.price_chart;
    let ma = &view.ma_chart;
    let n = chart.historical.len();
    let start = n.saturating_sub(5);

    println!("--- Recent history ---");
    println!("{:<12} {:>12} {:>12} {:>12}", "Date", "Close", "MA50", "MA200");
    for i in start..n {
        println!(
            "{:<12} {:>12.2} {:>12} {:>12}",
            chart.labels[i],
            chart.historical[i],
            fmt_opt(ma.ma50[i]),
            fmt_opt(ma.ma200[i])
        );
    }
    if let (Some(label), Some(Some(value))) = (chart.labels.last(), chart.predicted.last()) {
        println!("{:<12} {:>12}  (predicted)", label, format_price(*value));
    }
    println!();
}

fn print_rows(series: &TickerSeries, ma: &MovingAverages, tail: usize) {
    let n = series.len();
    let start = n.saturating_sub(tail);

    println!("{:<12} {:>12} {:>12} {:>12}", "Date", "Close", "MA50", "MA200");
    println!("{}", "-".repeat(51));
    for i in start..n {
        let p = &series.points[i];
        println!(
            "{:<12} {:>12.2} {:>12} {:>12}",
            p.date,
            p.close,
            fmt_opt(ma.ma50[i]),
            fmt_opt(ma.ma200[i])
        );
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_writes_csv_for_configured_symbol() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("itc.csv"),
            "Date,Close\n2024-01-02,441.5\n\n2024-01-03,445.0\n",
        )
        .unwrap();

        let mut config = StockcastConfig::default();
        config.data.dir = dir.path().to_path_buf();
        let out = dir.path().join("itc_export.csv");

        run_export(&config, "ITC", &out).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            written,
            "date,close,ma50,ma200\n2024-01-02,441.5,,\n2024-01-03,445,,\n"
        );
    }

    #[test]
    fn export_of_missing_file_reports_symbol() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StockcastConfig::default();
        config.data.dir = dir.path().to_path_buf();
        let out = dir.path().join("out.csv");

        let err = run_export(&config, "hdfc", &out).unwrap_err();
        assert!(err.to_string().contains("'hdfc'"));
        assert!(!out.exists());
    }
}
