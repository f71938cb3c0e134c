//! Trailing date window and request-token formatting

use crate::error::{RatesError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{Days, Local, NaiveDate};
use std::fmt::Write;

/// Days looked back from the anchor date (the anchor itself is also included)
pub const WINDOW_DAYS: u64 = 90;

/// A validated strftime pattern used to render request tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// Validate a chrono strftime pattern.
    ///
    /// chrono panics when displaying a date through a pattern it cannot render,
    /// either an unknown specifier or a time/offset field a plain date lacks
    /// (`%H`, `%z`, `%s`). The pattern is trial-rendered once up front so
    /// [`DateFormat::render`] cannot fail afterwards.
    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.trim().is_empty() {
            return Err(RatesError::Config("date format must not be empty".to_string()));
        }
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(RatesError::Config(format!(
                "invalid date format pattern: {:?}",
                pattern
            )));
        }

        let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN);
        let mut rendered = String::new();
        write!(
            rendered,
            "{}",
            sample.format_with_items(StrftimeItems::new(pattern))
        )
        .map_err(|_| {
            RatesError::Config(format!(
                "date format pattern {:?} needs fields a calendar date does not have",
                pattern
            ))
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render a date as a request token
    pub fn render(&self, date: NaiveDate) -> String {
        date.format(&self.pattern).to_string()
    }
}

/// Inclusive run of calendar days ending at an anchor date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// The fixed trailing window: `now - 90 days ..= now`, 91 dates in total
    pub fn trailing(now: NaiveDate) -> Self {
        let start = now.checked_sub_days(Days::new(WINDOW_DAYS)).unwrap_or(NaiveDate::MIN);
        Self { start, end: now }
    }

    /// Trailing window anchored at today's local date
    pub fn trailing_from_today() -> Self {
        Self::trailing(Local::now().date_naive())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of dates in the window
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Every date in the window, oldest first. Each call starts over.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start
            .iter_days()
            .take_while(move |d| *d <= end)
    }

    /// Dates paired with their rendered request tokens
    pub fn tokens<'a>(
        &self,
        format: &'a DateFormat,
    ) -> impl Iterator<Item = (NaiveDate, String)> + 'a {
        self.iter().map(move |d| (d, format.render(d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_trailing_window_has_91_dates() {
        let now = date(2026, 10, 16);
        let window = DateWindow::trailing(now);
        let dates: Vec<NaiveDate> = window.iter().collect();

        assert_eq!(dates.len(), 91);
        assert_eq!(window.len(), 91);
        assert_eq!(dates[0], date(2026, 7, 18));
        assert_eq!(*dates.last().unwrap(), now);
    }

    #[test]
    fn test_window_steps_one_calendar_day() {
        let window = DateWindow::trailing(date(2024, 3, 31));
        let dates: Vec<NaiveDate> = window.iter().collect();

        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
        }
        // crosses February of a leap year
        assert!(dates.contains(&date(2024, 2, 29)));
    }

    #[test]
    fn test_window_is_restartable() {
        let window = DateWindow::trailing(date(2026, 1, 5));
        let first: Vec<_> = window.iter().collect();
        let second: Vec<_> = window.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tokens_use_pattern() {
        let format = DateFormat::parse("%d/%m/%Y").unwrap();
        let window = DateWindow::trailing(date(2026, 1, 5));
        let tokens: Vec<(NaiveDate, String)> = window.tokens(&format).collect();

        assert_eq!(tokens.len(), 91);
        assert_eq!(tokens[0].1, "07/10/2025");
        assert_eq!(tokens[90].1, "05/01/2026");
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(matches!(DateFormat::parse("%Q"), Err(RatesError::Config(_))));
        assert!(matches!(DateFormat::parse("   "), Err(RatesError::Config(_))));
        assert!(DateFormat::parse("%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_time_and_offset_fields_rejected() {
        for pattern in ["%d/%m/%Y %H:%M", "%Y-%m-%d%z", "%s"] {
            assert!(
                matches!(DateFormat::parse(pattern), Err(RatesError::Config(_))),
                "{pattern} accepted"
            );
        }
    }

    #[test]
    fn test_accepted_pattern_renders_any_window_date() {
        let format = DateFormat::parse("%A %e %B %Y (%j)").unwrap();
        let window = DateWindow::trailing(date(2026, 1, 5));
        assert!(!window.is_empty());
        assert_eq!(window.tokens(&format).count(), 91);
        assert_eq!(format.render(date(2026, 1, 5)), "Monday  5 January 2026 (005)");
    }
}
