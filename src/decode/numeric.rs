//! Decimal-comma number normalization
//!
//! The feed publishes rates like `74,5023`. These helpers turn that into an
//! `f64` independently of any document parsing.

use crate::error::{RatesError, Result};

/// Parse a number written with a decimal comma.
///
/// Surrounding whitespace is trimmed and the first comma becomes a decimal
/// point. Text without a comma is parsed as-is. Anything that is not a finite
/// number afterwards is a `NumericFormat` error.
pub fn normalize_decimal_comma(raw: &str) -> Result<f64> {
    let normalized = raw.trim().replacen(',', ".", 1);
    let value: f64 = normalized
        .parse()
        .map_err(|_| RatesError::NumericFormat {
            raw: raw.to_string(),
        })?;

    if !value.is_finite() {
        return Err(RatesError::NumericFormat {
            raw: raw.to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_decimal_comma() {
        assert_relative_eq!(normalize_decimal_comma("74,50").unwrap(), 74.50);
        assert_relative_eq!(normalize_decimal_comma("0,0123").unwrap(), 0.0123);
    }

    #[test]
    fn test_no_comma_parsed_as_is() {
        assert_relative_eq!(normalize_decimal_comma("74.50").unwrap(), 74.50);
        assert_relative_eq!(normalize_decimal_comma("12").unwrap(), 12.0);
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_relative_eq!(normalize_decimal_comma(" 91,2345\n").unwrap(), 91.2345);
    }

    #[test]
    fn test_only_first_comma_replaced() {
        // "1,234,5" -> "1.234,5", which is not a number
        assert!(matches!(
            normalize_decimal_comma("1,234,5"),
            Err(RatesError::NumericFormat { .. })
        ));
    }

    #[test]
    fn test_malformed_text() {
        let err = normalize_decimal_comma("abc").unwrap_err();
        match err {
            RatesError::NumericFormat { raw } => assert_eq!(raw, "abc"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(normalize_decimal_comma("").is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(normalize_decimal_comma("NaN").is_err());
        assert!(normalize_decimal_comma("inf").is_err());
    }
}
