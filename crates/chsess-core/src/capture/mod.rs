//! Charles proxy capture format.
//!
//! A `.chlsj` export is a JSON array of records. The session store only looks
//! at the first record: its request headers and its raw query string.

mod parse;

pub use parse::{CaptureHeader, CaptureRecord, CaptureRequest, HeaderEntry};

/// Decodes a capture export into its records.
///
/// A top-level `null` decodes as no records and a `null` record as an empty
/// one.
pub fn parse_records(bytes: &[u8]) -> serde_json::Result<Vec<CaptureRecord>> {
    let records: Option<Vec<Option<CaptureRecord>>> = serde_json::from_slice(bytes)?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

impl CaptureRecord {
    /// Raw query string, empty when the record has none.
    pub fn query_str(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    /// Request headers in capture order.
    pub fn headers(&self) -> &[HeaderEntry] {
        &self.request.header.headers
    }

    /// Human-readable summary of the request, e.g. `POST https://host/path`.
    ///
    /// Falls back to the recorded first line when the URL parts are missing.
    pub fn request_line(&self) -> String {
        let method = self.method.as_deref().unwrap_or("?");
        match (self.host.as_deref(), self.path.as_deref()) {
            (Some(host), path) => {
                let scheme = self.scheme.as_deref().unwrap_or("https");
                format!("{method} {scheme}://{host}{}", path.unwrap_or("/"))
            }
            (None, _) => self
                .request
                .header
                .first_line
                .clone()
                .unwrap_or_else(|| method.to_string()),
        }
    }
}
