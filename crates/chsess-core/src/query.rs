//! URL query-string parsing.
//!
//! `url::form_urlencoded` accepts anything, so syntax is checked up front:
//! a segment may not contain `;`, and every `%` must start a two-digit hex
//! escape. Decoding itself (`+` as space, percent escapes) is left to `url`.

use std::collections::HashMap;
use url::form_urlencoded;

/// Malformed query string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid semicolon separator in query")]
    Semicolon,
    #[error("invalid URL escape {0:?}")]
    BadEscape(String),
}

/// Parsed query: each key maps to its values in order of appearance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryValues {
    values: HashMap<String, Vec<String>>,
}

impl QueryValues {
    /// Parses a raw query string (without the leading `?`).
    ///
    /// The whole string is validated; the first syntax error is returned.
    /// Escapes that decode to invalid UTF-8 become U+FFFD and are logged at
    /// `warn`; the raw bytes are not kept.
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for segment in query.split('&') {
            if segment.contains(';') {
                return Err(QueryError::Semicolon);
            }
            if segment.is_empty() {
                continue;
            }
            check_escapes(segment)?;
            if decodes_lossily(segment) {
                tracing::warn!("query segment {segment:?} is not valid UTF-8 once decoded");
            }
            if let Some((key, value)) = form_urlencoded::parse(segment.as_bytes()).next() {
                values
                    .entry(key.into_owned())
                    .or_default()
                    .push(value.into_owned());
            }
        }
        Ok(Self { values })
    }

    /// First value for `key`; `""` when the key is absent or has no values.
    pub fn first_value(&self, key: &str) -> &str {
        self.values
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(Vec::as_slice)
    }

    /// Iterates keys with their values (arbitrary key order).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn check_escapes(segment: &str) -> Result<(), QueryError> {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                let bad = String::from_utf8_lossy(&bytes[i..end]).into_owned();
                return Err(QueryError::BadEscape(bad));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// True when the percent-decoded bytes of `segment` are not UTF-8.
///
/// Expects escapes already checked by [`check_escapes`].
fn decodes_lossily(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let byte = bytes
                .get(i + 1..i + 3)
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok());
            decoded.push(byte.unwrap_or(0));
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }
    std::str::from_utf8(&decoded).is_err()
}
