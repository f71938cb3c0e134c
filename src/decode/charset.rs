//! Charset registry: declared encoding label -> transcoder to UTF-8

use crate::error::{RatesError, Result};
use encoding_rs::{UTF_8, WINDOWS_1251};
use std::collections::HashMap;

/// Turns raw document bytes in one charset into UTF-8 text
pub type CharsetDecoder = fn(&[u8]) -> Result<String>;

/// Registry of supported document charsets
#[derive(Clone)]
pub struct CharsetRegistry {
    decoders: HashMap<String, CharsetDecoder>,
}

impl CharsetRegistry {
    /// Create a registry with nothing registered
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register a decoder under a charset label (case-insensitive)
    pub fn register(&mut self, label: &str, decoder: CharsetDecoder) {
        self.decoders.insert(normalize_label(label), decoder);
    }

    /// Find the decoder for a declared label
    pub fn lookup(&self, label: &str) -> Result<CharsetDecoder> {
        self.decoders
            .get(&normalize_label(label))
            .copied()
            .ok_or_else(|| {
                log::debug!("charset {:?} not in {:?}", label, self.labels());
                RatesError::UnsupportedEncoding(label.to_string())
            })
    }

    /// Transcode bytes declared as `label` into UTF-8
    pub fn decode(&self, label: &str, bytes: &[u8]) -> Result<String> {
        let decoder = self.lookup(label)?;
        decoder(bytes)
    }

    pub fn is_supported(&self, label: &str) -> bool {
        self.decoders.contains_key(&normalize_label(label))
    }

    /// Registered labels, sorted
    fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.decoders.keys().cloned().collect();
        labels.sort();
        labels
    }
}

impl Default for CharsetRegistry {
    /// UTF-8 plus the legacy windows-1251 encoding the feed is published in
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("utf-8", decode_utf8);
        registry.register("utf8", decode_utf8);
        registry.register("windows-1251", decode_windows_1251);
        registry.register("cp1251", decode_windows_1251);
        registry.register("x-cp1251", decode_windows_1251);
        registry
    }
}

impl std::fmt::Debug for CharsetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharsetRegistry")
            .field("labels", &self.labels())
            .finish()
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_ascii_lowercase()
}

/// Strict UTF-8: invalid sequences are a decode error, not replacement chars
pub fn decode_utf8(bytes: &[u8]) -> Result<String> {
    UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| RatesError::Decode("document is not valid UTF-8".to_string()))
}

pub fn decode_windows_1251(bytes: &[u8]) -> Result<String> {
    let (text, had_errors) = WINDOWS_1251.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(RatesError::Decode(
            "document contains bytes unmapped in windows-1251".to_string(),
        ));
    }
    Ok(text.into_owned())
}
