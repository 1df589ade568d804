//! Fixed header and parameter names projected out of a capture.

use std::collections::HashMap;

use crate::capture::HeaderEntry;
use crate::query::QueryValues;

/// Forced value of `content-type`, whatever the capture recorded.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Headers always present in the decoded header map.
pub const HEADER_ALLOW_LIST: &[&str] = &[
    "accept",
    "accept-encoding",
    "accept-language",
    "content-type",
    "cookie",
    "x-tingyun-id",
    "x-tingyun",
    "ddmc-api-version",
    "ddmc-app-client-id",
    "ddmc-build-version",
    "ddmc-channel",
    "ddmc-city-number",
    "ddmc-country-code",
    "ddmc-device-id",
    "ddmc-device-model",
    "ddmc-device-name",
    "ddmc-device-token",
    "ddmc-idfa",
    "ddmc-ip",
    "ddmc-language-code",
    "ddmc-latitude",
    "ddmc-locale-identifier",
    "ddmc-longitude",
    "ddmc-os-version",
    "ddmc-station-id",
    "ddmc-uid",
    "time",
    "user-agent",
];

/// Parameters seeded into the decoded param map.
pub const PARAM_ALLOW_LIST: &[&str] = &[
    "api_version",
    "app_client_id",
    "app_type",
    "buildVersion",
    "channel",
    "city_number",
    "countryCode",
    "device_id",
    "device_model",
    "device_name",
    "device_token",
    "idfa",
    "ip",
    "languageCode",
    "latitude",
    "localeIdentifier",
    "longitude",
    "os_version",
    "seqid",
    "station_id",
    "time",
    "uid",
];

/// Projects captured headers onto [`HEADER_ALLOW_LIST`].
///
/// Names match case-sensitively. A name recorded more than once resolves to
/// its last occurrence.
pub(crate) fn project_headers(entries: &[HeaderEntry]) -> HashMap<String, String> {
    let mut captured: HashMap<&str, &str> = HashMap::with_capacity(entries.len());
    for entry in entries {
        // last wins
        captured.insert(&entry.name, &entry.value);
    }

    HEADER_ALLOW_LIST
        .iter()
        .map(|&name| {
            let value = if name == "content-type" {
                FORM_CONTENT_TYPE
            } else {
                captured.get(name).copied().unwrap_or("")
            };
            (name.to_string(), value.to_string())
        })
        .collect()
}

/// Builds the param map from a parsed query: every allow-listed name (first
/// value or `""`), then every key the query actually carries.
///
/// NOTE: the second pass lets keys outside [`PARAM_ALLOW_LIST`] through, so
/// the list guarantees presence but does not filter. It is unclear whether
/// that looseness is intended; do not tighten it without checking callers.
pub(crate) fn project_params(values: &QueryValues) -> HashMap<String, String> {
    let mut params: HashMap<String, String> = PARAM_ALLOW_LIST
        .iter()
        .map(|&name| (name.to_string(), values.first_value(name).to_string()))
        .collect();

    for (key, _) in values.iter() {
        // first value wins for repeated keys
        params.insert(key.to_string(), values.first_value(key).to_string());
    }
    params
}
