//! Headless runner
//!
//! Drives the scanner and one injection run without a window and prints
//! what the panel would have shown.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tokio::runtime::Handle;

use ghx_pro::core::config::AppConfig;
use ghx_pro::core::error::Result;
use ghx_pro::core::types::group_thousands;
use ghx_pro::injector::Currency;
use ghx_pro::runner::{run_injection, run_scan};
use ghx_pro::scanner::ScanResult;

/// Headless GH-X runner - scan and inject without a window
#[derive(Parser, Debug)]
#[command(name = "ghx-headless")]
#[command(about = "Run a fake scan and a fake injection and print the output")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic scans
    #[arg(long)]
    seed: Option<u64>,

    /// Value to "search memory" for
    #[arg(long, default_value = "")]
    search: String,

    /// Currency tab to run
    #[arg(long, value_enum, default_value_t = CurrencyArg::Robux)]
    currency: CurrencyArg,

    /// Username shown in the injection log
    #[arg(long, default_value = "player")]
    username: String,

    /// Amount shown in the injection log
    #[arg(long)]
    amount: Option<String>,

    /// Multiplier for every scripted delay (0 runs instantly)
    #[arg(long)]
    time_scale: Option<f32>,

    /// Skip the scan
    #[arg(long)]
    skip_scan: bool,

    /// Skip the injection run
    #[arg(long)]
    skip_inject: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CurrencyArg {
    Robux,
    Diamonds,
}

impl From<CurrencyArg> for Currency {
    fn from(arg: CurrencyArg) -> Self {
        match arg {
            CurrencyArg::Robux => Currency::Robux,
            CurrencyArg::Diamonds => Currency::Diamonds,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// JSON output structure
#[derive(Serialize)]
struct RunReport {
    scan: Option<Vec<ScanResult>>,
    currency: Option<Currency>,
    log: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ghx_pro=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load_from_toml(path)?,
        None => AppConfig::default(),
    };
    if args.seed.is_some() {
        config.scanner.seed = args.seed;
    }
    if let Some(scale) = args.time_scale {
        config.timing.time_scale = scale;
    }
    config.validate().map_err(ghx_pro::core::GhxError::InvalidConfig)?;

    let runtime = Handle::current();

    let scan = if args.skip_scan {
        None
    } else {
        Some(run_scan(&runtime, &config, &args.search).await)
    };

    let (currency, log) = if args.skip_inject {
        (None, Vec::new())
    } else {
        let currency = Currency::from(args.currency);
        let amount = args
            .amount
            .clone()
            .unwrap_or_else(|| config.injector.default_amount.clone());
        let log = run_injection(&runtime, &config, currency, &args.username, &amount).await;
        (Some(currency), log)
    };

    let report = RunReport {
        scan,
        currency,
        log,
    };

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print_text(&report),
    }

    Ok(())
}

fn print_text(report: &RunReport) {
    if let Some(scan) = &report.scan {
        println!("{} results found.", scan.len());
        for result in scan {
            println!("  {}  {}", result.address, group_thousands(result.value));
        }
    }

    if let Some(currency) = report.currency {
        if report.scan.is_some() {
            println!();
        }
        println!("{}", currency.title());
        for line in &report.log {
            println!("> {line}");
        }
    }
}
