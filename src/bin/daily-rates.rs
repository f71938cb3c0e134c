//! daily-rates CLI - 90-day exchange rate summary
//!
//! ## Example Usage
//!
//! ```bash
//! # Summarize the trailing 90 days
//! daily-rates summary
//!
//! # Keep going past days the bank could not serve, print JSON
//! daily-rates summary --policy skip --json
//!
//! # Show a single day's rates
//! daily-rates day 2026-10-16
//!
//! # Print the effective configuration
//! daily-rates --config ./config.toml config
//! ```

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use daily_rates::calendar::DateWindow;
use daily_rates::config::Config;
use daily_rates::error::{RatesError, Result};
use daily_rates::pipeline::{DayOutcome, FailurePolicy, RateCollector};
use daily_rates::report;
use daily_rates::sources::HttpRateFetcher;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process;

/// daily-rates: rolling 90-day central bank exchange rate summary
#[derive(Parser)]
#[command(name = "daily-rates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rolling 90-day central bank exchange rate summary", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the trailing window and print min/max/average
    Summary {
        /// What to do when a day fails (overrides the config file)
        #[arg(short = 'p', long, value_enum)]
        policy: Option<PolicyArg>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Fetch and print a single day's rates
    Day {
        /// Date to fetch (YYYY-MM-DD)
        #[arg(value_name = "DATE")]
        date: String,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Abort,
    Skip,
}

impl From<PolicyArg> for FailurePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Abort => FailurePolicy::Abort,
            PolicyArg::Skip => FailurePolicy::Skip,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = Config::load(cli.config.as_deref()).and_then(|config| {
        if cli.verbose {
            println!(
                "{} v{}",
                "daily-rates".cyan().bold(),
                env!("CARGO_PKG_VERSION")
            );
            println!("Endpoint: {}", config.api.base_url.dimmed());
        }

        match cli.command {
            Commands::Summary {
                policy,
                json,
                no_progress,
            } => run_summary(config, policy.map(Into::into), json, !no_progress),
            Commands::Day { date } => show_day(&config, &date),
            Commands::Config => show_config(&config),
        }
    });

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run_summary(
    config: Config,
    policy: Option<FailurePolicy>,
    json: bool,
    show_progress: bool,
) -> Result<()> {
    let fetcher = HttpRateFetcher::from_config(&config.api)?;
    let mut collector = RateCollector::from_config(fetcher, &config)?;
    if let Some(policy) = policy {
        collector = collector.with_policy(policy);
    }

    let window = DateWindow::trailing_from_today();

    let pb = if show_progress {
        ProgressBar::new(window.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map_err(|e| RatesError::Config(format!("progress template: {}", e)))?
            .progress_chars("#>-"),
    );

    let collected = collector.collect_with_progress(&window, |day| {
        let status = match day.outcome {
            DayOutcome::Collected(n) => format!("{} ({} quotes)", day.token, n),
            DayOutcome::Skipped => format!("{} skipped", day.token),
        };
        pb.set_message(status);
        pb.inc(1);
    });
    pb.finish_and_clear();
    let collected = collected?;

    if !collected.failures.is_empty() {
        eprintln!(
            "{} {} of {} days skipped:",
            "Warning:".yellow(),
            collected.failures.len(),
            collected.days_requested
        );
        eprint!("{}", report::render_failures(&collected.failures));
    }

    let summary = collected.summarize()?;
    if json {
        println!("{}", report::render_json(&summary)?);
    } else {
        println!("{}", "Exchange rate summary".cyan().bold());
        println!(
            "{}",
            format!(
                "{} ..= {}, {} quotes from {} days",
                window.start(),
                window.end(),
                summary.count,
                collected.days_collected()
            )
            .dimmed()
        );
        println!();
        print!("{}", report::render_text(&summary));
    }

    Ok(())
}

fn show_day(config: &Config, date: &str) -> Result<()> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| RatesError::Config(format!("invalid date {:?}: {}", date, e)))?;
    if date > Local::now().date_naive() {
        log::warn!("{} is in the future; the bank serves its latest published rates", date);
    }

    let fetcher = HttpRateFetcher::from_config(&config.api)?;
    let collector = RateCollector::from_config(fetcher, config)?;
    let day = collector.fetch_day(date)?;

    print!("{}", report::render_day(&day));
    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
