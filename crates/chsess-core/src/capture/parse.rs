//! Minimal Charles session (`.chlsj`) structures.
//!
//! Only the request side of each record is modelled. Every field is optional
//! on the wire, and an explicit `null` reads the same as a missing key, so a
//! sparse export still decodes; missing header lists are caught by the
//! session store instead.

use serde::{Deserialize, Deserializer};

/// One recorded request/response transaction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureRecord {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    /// Raw query string of the request URL, without the leading `?`.
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request: CaptureRequest,
}

#[derive(Debug, Default, Deserialize)]
pub struct CaptureRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub header: CaptureHeader,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureHeader {
    #[serde(default)]
    pub first_line: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: Vec<HeaderEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HeaderEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

impl HeaderEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Reads `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
