//! Plain-text and JSON rendering of results

use crate::error::Result;
use crate::pipeline::DayFailure;
use crate::types::{DailyRates, SummaryResult};
use std::fmt::Write;

/// Human-readable summary, one fact per line
pub fn render_text(summary: &SummaryResult) -> String {
    let min = &summary.minimum;
    let max = &summary.maximum;
    let mut out = String::new();

    // writeln! into a String cannot fail
    let _ = writeln!(out, "Minimum rate on: {}", min.date);
    let _ = writeln!(out, "Currency: {} ({})", min.name, min.char_code);
    let _ = writeln!(out, "Value: {}", min.value);
    let _ = writeln!(out, "Maximum rate on: {}", max.date);
    let _ = writeln!(out, "Currency: {} ({})", max.name, max.char_code);
    let _ = writeln!(out, "Value: {}", max.value);
    let _ = writeln!(
        out,
        "Average rate over the period across all currencies: {:.6}",
        summary.average
    );
    out
}

/// Summary as pretty-printed JSON
pub fn render_json(summary: &SummaryResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// One day's quotes as an aligned table
pub fn render_day(day: &DailyRates) -> String {
    let name_width = day
        .quotes
        .iter()
        .map(|q| q.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = String::new();
    let _ = writeln!(out, "Rates published for {}", day.date);
    let _ = writeln!(out, "{:<5} {:<width$} {:>14}", "Code", "Name", "Value", width = name_width);
    for quote in &day.quotes {
        let _ = writeln!(
            out,
            "{:<5} {:<width$} {:>14.4}",
            quote.char_code,
            quote.name,
            quote.value,
            width = name_width
        );
    }
    out
}

/// Skipped days, one per line
pub fn render_failures(failures: &[DayFailure]) -> String {
    let mut out = String::new();
    for failure in failures {
        let _ = writeln!(out, "{} ({}): {}", failure.date, failure.token, failure.error);
    }
    out
}
