//! Window summary: minimum, maximum and average rate
//!
//! The IMF special drawing right (`XDR`) is published alongside ordinary
//! currencies but is a basket unit, so it never takes part in the summary.

use crate::error::{EmptyDataCause, RatesError, Result};
use crate::types::{CurrencyQuote, SummaryResult};

/// Currency code removed before any statistic is computed
pub const EXCLUDED_CURRENCY_CODE: &str = "XDR";

/// Whether a quote is dropped by the exclusion filter
pub fn is_excluded(quote: &CurrencyQuote) -> bool {
    quote.char_code == EXCLUDED_CURRENCY_CODE
}

/// Summarize a window of quotes.
///
/// Minimum and maximum only move on a strictly smaller or larger value, so on
/// ties the earliest quote in the input wins.
pub fn summarize(quotes: &[CurrencyQuote]) -> Result<SummaryResult> {
    if quotes.is_empty() {
        return Err(RatesError::EmptyData(EmptyDataCause::NoInputData));
    }

    let mut filtered = quotes.iter().filter(|q| !is_excluded(q));
    let first = filtered
        .next()
        .ok_or(RatesError::EmptyData(EmptyDataCause::NoDataAfterExclusion))?;

    let mut minimum = first;
    let mut maximum = first;
    let mut sum = first.value;
    let mut count = 1usize;

    for quote in filtered {
        if quote.value < minimum.value {
            minimum = quote;
        }
        if quote.value > maximum.value {
            maximum = quote;
        }
        sum += quote.value;
        count += 1;
    }

    let result = SummaryResult {
        minimum: minimum.clone(),
        maximum: maximum.clone(),
        average: sum / count as f64,
        count,
    };
    log::debug!(
        "summarized {} quotes ({} excluded): min {} {}, max {} {}",
        count,
        quotes.len() - count,
        result.minimum.char_code,
        result.minimum.value,
        result.maximum.char_code,
        result.maximum.value
    );

    Ok(result)
}
