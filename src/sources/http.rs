//! Central bank daily-rate endpoint
//!
//! Each request is `GET {base_url}{date_token}` with a fixed `User-Agent`
//! header; the bank's endpoint rejects clients that do not send one.

use super::RateSource;
use crate::config::ApiConfig;
use crate::error::{RatesError, Result};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use std::time::Duration;

/// Blocking HTTP fetcher for daily documents. No retries.
pub struct HttpRateFetcher {
    client: Client,
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl HttpRateFetcher {
    /// Create a new fetcher
    pub fn new(
        base_url: impl Into<String>,
        user_agent: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RatesError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            user_agent: user_agent.into(),
            timeout,
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        Self::new(&api.base_url, &api.user_agent, api.timeout())
    }

    /// Full request URL for a date token
    pub fn url_for(&self, date_token: &str) -> String {
        format!("{}{}", self.base_url, date_token)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn transport_error(&self, url: &str, e: reqwest::Error) -> RatesError {
        let message = if e.is_timeout() {
            format!("request timed out after {:?}", self.timeout)
        } else {
            e.to_string()
        };
        RatesError::Transport {
            url: url.to_string(),
            message,
        }
    }
}

impl RateSource for HttpRateFetcher {
    fn fetch(&self, date_token: &str) -> Result<Vec<u8>> {
        let url = self.url_for(date_token);
        if date_token.is_empty() {
            return Err(RatesError::Transport {
                url,
                message: "empty date token".to_string(),
            });
        }

        let request = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .build()
            .map_err(|e| self.transport_error(&url, e))?;

        log::debug!("GET {}", url);
        let response = self
            .client
            .execute(request)
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RatesError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| self.transport_error(&url, e))?;
        log::debug!("{} -> {} bytes", url, body.len());

        Ok(body.to_vec())
    }

    fn name(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_creation() {
        let fetcher = HttpRateFetcher::new(
            "http://localhost/rates?date_req=",
            "daily-rates-test",
            Duration::from_secs(5),
        );
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_url_is_base_plus_token() {
        let fetcher =
            HttpRateFetcher::new("http://example.com/x?d=", "ua", Duration::from_secs(1)).unwrap();
        assert_eq!(fetcher.url_for("01/02/2026"), "http://example.com/x?d=01/02/2026");
    }

    #[test]
    fn test_invalid_url_is_transport_error() {
        let fetcher = HttpRateFetcher::new("not a url ", "ua", Duration::from_secs(1)).unwrap();
        assert!(matches!(
            fetcher.fetch("01/02/2026"),
            Err(RatesError::Transport { .. })
        ));
    }

    #[test]
    fn test_empty_token_is_transport_error() {
        let fetcher =
            HttpRateFetcher::new("http://localhost/", "ua", Duration::from_secs(1)).unwrap();
        assert!(matches!(fetcher.fetch(""), Err(RatesError::Transport { .. })));
    }
}
