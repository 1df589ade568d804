//! Lock-guarded header and param maps built from a capture.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::capture::{self, HeaderEntry};
use crate::query::QueryValues;
use crate::source::{CaptureSource, FsCaptureSource};

use super::allow_list::{project_headers, project_params};
use super::error::SessionError;

/// Directory below the capture root that holds iOS captures.
pub const CAPTURE_SUBDIR: &str = "charles/ios";

#[derive(Debug, Default)]
struct SessionMaps {
    headers: HashMap<String, String>,
    params: HashMap<String, String>,
}

/// Headers and query params extracted from a capture, shared across threads.
///
/// Accessors return copies made while the read lock is held, so a reader sees
/// either the state before a write or after it, never a half-written map.
#[derive(Debug)]
pub struct SessionStore<S = FsCaptureSource> {
    source: S,
    maps: RwLock<SessionMaps>,
}

impl SessionStore<FsCaptureSource> {
    /// Empty store reading captures below the working directory.
    pub fn new() -> Self {
        Self::with_source(FsCaptureSource::new())
    }
}

impl Default for SessionStore<FsCaptureSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CaptureSource> SessionStore<S> {
    /// Path of capture `name` below the resolved root.
    pub fn capture_path(&self, name: &str) -> Result<PathBuf, SessionError> {
        let root = self.source.root_dir().map_err(SessionError::Root)?;
        Ok(root.join(CAPTURE_SUBDIR).join(name))
    }

    /// Loads `{root}/charles/ios/{name}` and decodes it.
    pub fn load_from_file(&self, name: &str) -> Result<(), SessionError> {
        let path = self.capture_path(name)?;
        self.load_from_path(&path)
    }

    /// Reads a capture at an explicit path and decodes it.
    pub fn load_from_path(&self, path: &Path) -> Result<(), SessionError> {
        tracing::debug!("loading capture {}", path.display());
        let bytes = self.source.read(path).map_err(|source| SessionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.decode(&bytes)
    }
}

impl<S> SessionStore<S> {
    /// Empty store using `source` for root resolution and reads.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            maps: RwLock::new(SessionMaps::default()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Decodes a capture export and stores the first record's headers and
    /// query params.
    ///
    /// Headers are decoded first; if that fails the params are left untouched.
    pub fn decode(&self, bytes: &[u8]) -> Result<(), SessionError> {
        let records = capture::parse_records(bytes).map_err(|e| {
            tracing::error!("parse capture JSON: {e}");
            SessionError::Json(e)
        })?;
        let Some(first) = records.first() else {
            tracing::error!("invalid capture file, no records present");
            return Err(SessionError::NoRecords);
        };
        tracing::debug!(
            records = records.len(),
            "decoding first capture record: {}",
            first.request_line()
        );

        self.decode_headers(first.headers())?;
        self.decode_params(first.query_str())
    }

    /// Projects `entries` onto the header allow-list and replaces the stored
    /// header map with the result.
    pub fn decode_headers(&self, entries: &[HeaderEntry]) -> Result<(), SessionError> {
        if entries.is_empty() {
            tracing::error!("invalid capture file, no headers present");
            return Err(SessionError::NoHeaders);
        }
        let headers = project_headers(entries);
        tracing::debug!(
            captured = entries.len(),
            stored = headers.len(),
            "decoded capture headers"
        );
        self.set_headers(headers);
        Ok(())
    }

    /// Parses `query` and merges the projected params into the stored map.
    pub fn decode_params(&self, query: &str) -> Result<(), SessionError> {
        let values = QueryValues::parse(query).map_err(|e| {
            tracing::error!("parse query params: {e}");
            SessionError::QuerySyntax(e)
        })?;
        let params = project_params(&values);
        tracing::debug!(
            parsed = values.len(),
            stored = params.len(),
            "decoded capture params"
        );
        self.set_params(params);
        Ok(())
    }

    /// Copy of the current header map.
    pub fn headers(&self) -> HashMap<String, String> {
        self.read_maps().headers.clone()
    }

    /// Copy of the current param map.
    pub fn query_params(&self) -> HashMap<String, String> {
        self.read_maps().params.clone()
    }

    /// Replaces the header map wholesale.
    pub fn set_headers(&self, headers: HashMap<String, String>) {
        self.write_maps().headers = headers;
    }

    /// Merges `params` into the param map; keys not in `params` are kept.
    ///
    /// Unlike [`set_headers`](Self::set_headers) this accumulates across
    /// decodes.
    pub fn set_params(&self, params: HashMap<String, String>) {
        self.write_maps().params.extend(params);
    }

    // Writers never leave the maps half-updated, so a poisoned lock still
    // guards consistent data.
    fn read_maps(&self) -> RwLockReadGuard<'_, SessionMaps> {
        self.maps.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_maps(&self) -> RwLockWriteGuard<'_, SessionMaps> {
        self.maps.write().unwrap_or_else(PoisonError::into_inner)
    }
}
