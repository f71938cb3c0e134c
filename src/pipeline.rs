//! Fetch → decode → accumulate over the date window
//!
//! The collector walks the window one date at a time, in order. What happens
//! when a single day fails is decided by [`FailurePolicy`], never by the
//! process exiting.

use crate::aggregate::summarize;
use crate::calendar::{DateFormat, DateWindow};
use crate::config::Config;
use crate::decode::DocumentDecoder;
use crate::error::{RatesError, Result};
use crate::sources::RateSource;
use crate::types::{DailyRates, RateWindow, SummaryResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do when one day's fetch or decode fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failing day and return its error
    #[default]
    Abort,
    /// Record the failure and continue with the remaining days
    Skip,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = RatesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" => Ok(FailurePolicy::Skip),
            other => Err(RatesError::Config(format!(
                "unknown failure policy {:?} (expected \"abort\" or \"skip\")",
                other
            ))),
        }
    }
}

/// A day that was skipped, and why
#[derive(Debug)]
pub struct DayFailure {
    pub date: NaiveDate,
    pub token: String,
    pub error: RatesError,
}

/// Per-day outcome reported to progress callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOutcome {
    /// Number of quotes the day contributed
    Collected(usize),
    Skipped,
}

#[derive(Debug, Clone)]
pub struct DayProgress<'a> {
    /// Zero-based position in the window
    pub index: usize,
    pub total: usize,
    pub date: NaiveDate,
    pub token: &'a str,
    pub outcome: DayOutcome,
}

/// Everything gathered over one pass of the window
#[derive(Debug)]
pub struct CollectionReport {
    pub quotes: RateWindow,
    pub failures: Vec<DayFailure>,
    pub days_requested: usize,
}

impl CollectionReport {
    pub fn days_collected(&self) -> usize {
        self.days_requested - self.failures.len()
    }

    pub fn summarize(&self) -> Result<SummaryResult> {
        summarize(self.quotes.as_slice())
    }
}

/// Summary plus the collection it was computed from
#[derive(Debug)]
pub struct RunOutcome {
    pub summary: SummaryResult,
    pub report: CollectionReport,
}

/// Drives a [`RateSource`] across a [`DateWindow`]
pub struct RateCollector<S: RateSource> {
    source: S,
    decoder: DocumentDecoder,
    date_format: DateFormat,
    policy: FailurePolicy,
}

impl<S: RateSource> RateCollector<S> {
    pub fn new(source: S, date_format: DateFormat) -> Self {
        Self {
            source,
            decoder: DocumentDecoder::default(),
            date_format,
            policy: FailurePolicy::default(),
        }
    }

    /// Collector using the config's date pattern and failure policy
    pub fn from_config(source: S, config: &Config) -> Result<Self> {
        Ok(Self::new(source, config.dates.format()?).with_policy(config.run.failure_policy))
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_decoder(mut self, decoder: DocumentDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and decode a single date
    pub fn fetch_day(&self, date: NaiveDate) -> Result<DailyRates> {
        self.fetch_token(&self.date_format.render(date))
    }

    fn fetch_token(&self, token: &str) -> Result<DailyRates> {
        let bytes = self.source.fetch(token)?;
        self.decoder.decode(&bytes)
    }

    pub fn collect(&self, window: &DateWindow) -> Result<CollectionReport> {
        self.collect_with_progress(window, |_| {})
    }

    /// Collect the whole window, calling `on_day` after every date
    pub fn collect_with_progress<F>(
        &self,
        window: &DateWindow,
        mut on_day: F,
    ) -> Result<CollectionReport>
    where
        F: FnMut(&DayProgress<'_>),
    {
        let total = window.len();
        let mut quotes = RateWindow::for_days(total);
        let mut failures = Vec::new();

        log::info!(
            "collecting {} days ({} ..= {}) from {} with policy {}",
            total,
            window.start(),
            window.end(),
            self.source.name(),
            self.policy
        );

        for (index, (date, token)) in window.tokens(&self.date_format).enumerate() {
            let outcome = match self.fetch_token(&token) {
                Ok(day) => {
                    let count = day.len();
                    log::debug!("{}: {} quotes published for {}", token, count, day.date);
                    quotes.extend_day(day);
                    DayOutcome::Collected(count)
                }
                Err(error) if self.policy == FailurePolicy::Skip && error.is_day_scoped() => {
                    log::warn!("skipping {}: {}", token, error);
                    failures.push(DayFailure {
                        date,
                        token: token.clone(),
                        error,
                    });
                    DayOutcome::Skipped
                }
                Err(error) => {
                    log::error!("aborting at {}: {}", token, error);
                    return Err(error);
                }
            };

            on_day(&DayProgress {
                index,
                total,
                date,
                token: &token,
                outcome,
            });
        }

        log::info!(
            "collected {} quotes, {} of {} days skipped",
            quotes.len(),
            failures.len(),
            total
        );

        Ok(CollectionReport {
            quotes,
            failures,
            days_requested: total,
        })
    }

    /// Collect the trailing window ending at `now` and summarize it
    pub fn run(&self, now: NaiveDate) -> Result<RunOutcome> {
        let report = self.collect(&DateWindow::trailing(now))?;
        let summary = report.summarize()?;
        Ok(RunOutcome { summary, report })
    }
}

/// One-call run: trailing window ending at `now`, collected and summarized
pub fn run_summary<S: RateSource>(source: S, config: &Config, now: NaiveDate) -> Result<RunOutcome> {
    RateCollector::from_config(source, config)?.run(now)
}
