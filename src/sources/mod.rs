//! Daily rate document sources
//!
//! - `http`: the central bank endpoint, one blocking GET per date token
//! - `InMemoryRateSource`: canned responses keyed by token, for tests and
//!   offline runs

pub mod http;

pub use http::HttpRateFetcher;

use crate::error::{RatesError, Result};
use std::collections::HashMap;

/// Anything that can hand back the raw document for a date token
pub trait RateSource {
    /// Fetch the raw document bytes for one rendered date token
    fn fetch(&self, date_token: &str) -> Result<Vec<u8>>;

    /// Get the source name
    fn name(&self) -> &str;
}

impl<S: RateSource + ?Sized> RateSource for &S {
    fn fetch(&self, date_token: &str) -> Result<Vec<u8>> {
        (**self).fetch(date_token)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: RateSource + ?Sized> RateSource for Box<S> {
    fn fetch(&self, date_token: &str) -> Result<Vec<u8>> {
        (**self).fetch(date_token)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[derive(Debug, Clone)]
enum CannedResponse {
    Body(Vec<u8>),
    Status(u16),
}

/// Source answering from a fixed token -> response table.
///
/// Unknown tokens answer with HTTP 404, like the real endpoint would for a
/// malformed date.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateSource {
    responses: HashMap<String, CannedResponse>,
}

impl InMemoryRateSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `date_token`
    pub fn add_document(&mut self, date_token: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.responses
            .insert(date_token.into(), CannedResponse::Body(body.into()));
    }

    /// Answer `date_token` with a non-OK HTTP status
    pub fn add_status(&mut self, date_token: impl Into<String>, status: u16) {
        self.responses
            .insert(date_token.into(), CannedResponse::Status(status));
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl RateSource for InMemoryRateSource {
    fn fetch(&self, date_token: &str) -> Result<Vec<u8>> {
        let url = format!("memory://{}", date_token);
        match self.responses.get(date_token) {
            Some(CannedResponse::Body(body)) => Ok(body.clone()),
            Some(CannedResponse::Status(status)) => Err(RatesError::HttpStatus {
                url,
                status: *status,
            }),
            None => Err(RatesError::HttpStatus { url, status: 404 }),
        }
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
