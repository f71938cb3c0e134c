//! Daily rate document decoding
//!
//! A daily document looks like:
//!
//! ```xml
//! <?xml version="1.0" encoding="windows-1251"?>
//! <ValCurs Date="16.10.2026" name="Foreign Currency Market">
//!   <Valute ID="R01235">
//!     <NumCode>840</NumCode>
//!     <CharCode>USD</CharCode>
//!     <Nominal>1</Nominal>
//!     <Name>Доллар США</Name>
//!     <Value>81,2345</Value>
//!   </Valute>
//! </ValCurs>
//! ```
//!
//! Decoding happens in three steps: the declared charset is looked up in a
//! [`CharsetRegistry`] and the bytes are transcoded to UTF-8, the text is
//! parsed structurally, and each `Value` goes through
//! [`normalize_decimal_comma`].
//!
//! The root element must be `ValCurs`. Any other root is a decode error, so an
//! error page or a renamed feed never passes as a day without quotes.
//! `Valute` records must be contiguous: the XML deserializer rejects a foreign
//! element placed between two of them.

pub mod charset;
pub mod numeric;

pub use charset::{CharsetDecoder, CharsetRegistry};
pub use numeric::normalize_decimal_comma;

use crate::error::{RatesError, Result};
use crate::types::{CurrencyQuote, DailyRates};
use serde::Deserialize;
use std::collections::HashSet;

/// Charset assumed when the prolog declares none
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Name of the document's root element
pub const ROOT_ELEMENT: &str = "ValCurs";

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

#[derive(Debug, Deserialize)]
struct ValCursDocument {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Valute", default)]
    valutes: Vec<ValuteRecord>,
}

#[derive(Debug, Deserialize)]
struct ValuteRecord {
    #[serde(rename = "CharCode")]
    char_code: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Value")]
    value: String,
}

/// Decodes raw daily documents into quotes
#[derive(Debug, Clone, Default)]
pub struct DocumentDecoder {
    registry: CharsetRegistry,
}

impl DocumentDecoder {
    pub fn new(registry: CharsetRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CharsetRegistry {
        &self.registry
    }

    /// Decode one document's bytes
    pub fn decode(&self, bytes: &[u8]) -> Result<DailyRates> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let (declared, body) = split_prolog(bytes)?;
        let charset = declared.as_deref().unwrap_or(DEFAULT_CHARSET);

        let text = self.registry.decode(charset, body)?;
        log::trace!("transcoded {} bytes from {}", body.len(), charset);

        match root_element(&text) {
            Some(ROOT_ELEMENT) => {}
            Some(other) => {
                return Err(RatesError::Decode(format!(
                    "unexpected root element <{}>, expected <{}>",
                    other, ROOT_ELEMENT
                )))
            }
            None => return Err(RatesError::Decode("document has no root element".to_string())),
        }

        let document: ValCursDocument = serde_xml_rs::from_str(&text)
            .map_err(|e| RatesError::Decode(format!("XML parse error: {}", e)))?;

        let mut seen = HashSet::with_capacity(document.valutes.len());
        let mut quotes = Vec::with_capacity(document.valutes.len());
        for record in document.valutes {
            let char_code = record.char_code.trim().to_string();
            if !seen.insert(char_code.clone()) {
                return Err(RatesError::Decode(format!(
                    "currency {} listed twice for {}",
                    char_code, document.date
                )));
            }
            let value = normalize_decimal_comma(&record.value)?;
            quotes.push(CurrencyQuote {
                date: document.date.clone(),
                char_code,
                name: record.name.trim().to_string(),
                value,
            });
        }

        Ok(DailyRates {
            date: document.date,
            quotes,
        })
    }
}

/// Decode with the default charset registry
pub fn decode(bytes: &[u8]) -> Result<DailyRates> {
    DocumentDecoder::default().decode(bytes)
}

/// Split off the `<?xml ... ?>` prolog, returning its declared encoding (if
/// any) and the remaining bytes.
fn split_prolog(bytes: &[u8]) -> Result<(Option<String>, &[u8])> {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let rest = &bytes[start..];

    if !rest.starts_with(b"<?xml") {
        return Ok((None, bytes));
    }

    let end = find(rest, b"?>")
        .ok_or_else(|| RatesError::Decode("unterminated XML declaration".to_string()))?;
    let declaration = String::from_utf8_lossy(&rest[..end]);

    Ok((declared_encoding(&declaration), &rest[end + 2..]))
}

/// Pull the `encoding="..."` pseudo-attribute out of an XML declaration
fn declared_encoding(declaration: &str) -> Option<String> {
    let after = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let after = after.trim_start().strip_prefix('=')?.trim_start();
    let quote = after.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &after[1..];
    let close = value.find(quote)?;
    Some(value[..close].to_string())
}

/// Name of the first element, skipping comments, processing instructions and
/// the doctype
fn root_element(text: &str) -> Option<&str> {
    let mut rest = text;
    loop {
        rest = &rest[rest.find('<')?..];
        if let Some(comment) = rest.strip_prefix("<!--") {
            rest = &comment[comment.find("-->")? + 3..];
        } else if rest.starts_with("<?") || rest.starts_with("<!") {
            rest = &rest[rest.find('>')? + 1..];
        } else {
            let tag = &rest[1..];
            let end = tag
                .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                .unwrap_or(tag.len());
            return Some(&tag[..end]).filter(|name| !name.is_empty());
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
