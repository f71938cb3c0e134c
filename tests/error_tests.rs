//! Error creation and message formatting

use daily_rates::error::{EmptyDataCause, RatesError};

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_transport_error() {
        let err = RatesError::Transport {
            url: "https://www.cbr.ru/scripts/XML_daily.asp?date_req=05/01/2026".to_string(),
            message: "connection refused".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("Transport error"));
        assert!(msg.contains("date_req=05/01/2026"));
        assert!(msg.contains("connection refused"));
        assert!(err.is_day_scoped());
    }

    #[test]
    fn test_http_status_error() {
        let err = RatesError::HttpStatus {
            url: "https://www.cbr.ru/scripts/XML_daily.asp?date_req=05/01/2026".to_string(),
            status: 503,
        };

        let msg = err.to_string();
        assert!(msg.contains("HTTP status error"));
        assert!(msg.contains("503"));
        assert!(err.is_day_scoped());
    }

    #[test]
    fn test_unsupported_encoding_error() {
        let err = RatesError::UnsupportedEncoding("koi8-r".to_string());
        assert!(err.to_string().contains("koi8-r"));
        assert!(err.is_day_scoped());
    }

    #[test]
    fn test_numeric_format_error() {
        let err = RatesError::NumericFormat {
            raw: "12,3,4".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Numeric format error"));
        assert!(msg.contains("\"12,3,4\""));
    }

    #[test]
    fn test_empty_data_messages() {
        let no_input = RatesError::EmptyData(EmptyDataCause::NoInputData);
        let excluded = RatesError::EmptyData(EmptyDataCause::NoDataAfterExclusion);

        assert_eq!(no_input.to_string(), "Empty data: no input data");
        assert_eq!(excluded.to_string(), "Empty data: no data after exclusion");
        assert!(!no_input.is_day_scoped());
        assert_eq!(no_input.empty_data_cause(), Some(EmptyDataCause::NoInputData));
    }

    #[test]
    fn test_config_error_not_day_scoped() {
        let err = RatesError::Config("api.base_url must not be empty".to_string());
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(!err.is_day_scoped());
        assert_eq!(err.empty_data_cause(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RatesError = io.into();
        assert!(matches!(err, RatesError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
