//! Core quote types

use serde::{Deserialize, Serialize};

/// One currency's rate on one published date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyQuote {
    /// Date exactly as published in the document (e.g. `16.10.2026`)
    pub date: String,
    /// Short alphabetic code, e.g. `USD`
    pub char_code: String,
    /// Display name as published
    pub name: String,
    /// Rate value after decimal-comma normalization
    pub value: f64,
}

impl CurrencyQuote {
    /// Create a new quote
    pub fn new(
        date: impl Into<String>,
        char_code: impl Into<String>,
        name: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            date: date.into(),
            char_code: char_code.into(),
            name: name.into(),
            value,
        }
    }
}

/// The decoded contents of one daily document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRates {
    pub date: String,
    pub quotes: Vec<CurrencyQuote>,
}

impl DailyRates {
    /// Look up a quote by currency code
    pub fn get(&self, char_code: &str) -> Option<&CurrencyQuote> {
        self.quotes.iter().find(|q| q.char_code == char_code)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Ordered accumulation of quotes over the whole date window.
///
/// Insertion order is date order, then document order. The same currency code
/// shows up once per day it was published.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateWindow {
    quotes: Vec<CurrencyQuote>,
}

/// Rough number of currencies in one daily document, used for pre-sizing
const TYPICAL_QUOTES_PER_DAY: usize = 45;

impl RateWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a window of `days` documents
    pub fn for_days(days: usize) -> Self {
        Self {
            quotes: Vec::with_capacity(days.saturating_mul(TYPICAL_QUOTES_PER_DAY)),
        }
    }

    /// Append one day's quotes, keeping document order
    pub fn extend_day(&mut self, day: DailyRates) {
        self.quotes.extend(day.quotes);
    }

    pub fn as_slice(&self) -> &[CurrencyQuote] {
        &self.quotes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurrencyQuote> {
        self.quotes.iter()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl From<Vec<CurrencyQuote>> for RateWindow {
    fn from(quotes: Vec<CurrencyQuote>) -> Self {
        Self { quotes }
    }
}

impl<'a> IntoIterator for &'a RateWindow {
    type Item = &'a CurrencyQuote;
    type IntoIter = std::slice::Iter<'a, CurrencyQuote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}

/// Minimum, maximum and average over the filtered window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub minimum: CurrencyQuote,
    pub maximum: CurrencyQuote,
    pub average: f64,
    /// Number of quotes that survived the exclusion filter
    pub count: usize,
}
