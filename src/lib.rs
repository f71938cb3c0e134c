//! # daily_rates
//!
//! Rolling 90-day summary of a central bank's daily exchange-rate feed.
//!
//! One document is fetched per calendar day of the trailing window, decoded
//! (legacy charset, decimal-comma numbers) into currency quotes, and the whole
//! window is reduced to its minimum, maximum and average rate, leaving out the
//! `XDR` basket unit.
//!
//! ## Example
//!
//! ```rust,no_run
//! use daily_rates::prelude::*;
//! use chrono::Local;
//!
//! fn main() -> Result<()> {
//!     let config = Config::load(None)?;
//!     let fetcher = HttpRateFetcher::from_config(&config.api)?;
//!
//!     let outcome = run_summary(fetcher, &config, Local::now().date_naive())?;
//!     println!("{}", daily_rates::report::render_text(&outcome.summary));
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod calendar;
pub mod config;
pub mod decode;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod sources;
pub mod types;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::aggregate::{summarize, EXCLUDED_CURRENCY_CODE};
    pub use crate::calendar::{DateFormat, DateWindow};
    pub use crate::config::Config;
    pub use crate::decode::{decode, normalize_decimal_comma, CharsetRegistry, DocumentDecoder};
    pub use crate::error::{EmptyDataCause, RatesError, Result};
    pub use crate::pipeline::{
        run_summary, CollectionReport, FailurePolicy, RateCollector, RunOutcome,
    };
    pub use crate::sources::{HttpRateFetcher, InMemoryRateSource, RateSource};
    pub use crate::types::{CurrencyQuote, DailyRates, RateWindow, SummaryResult};
}
