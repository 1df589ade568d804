//! Error types for loading and decoding capture sessions.

use std::io;
use std::path::PathBuf;

use crate::query::QueryError;

/// Failure while loading or decoding a capture session.
///
/// Wrapping variants keep the underlying error as `source()`; print with
/// `{:#}` (anyhow) to see the whole chain.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The capture root could not be resolved.
    #[error("resolve capture root")]
    Root(#[source] io::Error),
    #[error("read capture file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Not JSON, or not an array of capture records.
    #[error("parse capture JSON")]
    Json(#[source] serde_json::Error),
    /// The record array is empty.
    #[error("invalid capture file, no headers present")]
    NoRecords,
    /// The first record has no request headers.
    #[error("invalid capture file, no headers present")]
    NoHeaders,
    #[error("parse query params")]
    QuerySyntax(#[source] QueryError),
}

/// Coarse classification of [`SessionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    QuerySyntax,
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Root(_) | SessionError::Read { .. } => ErrorKind::Io,
            SessionError::Json(_) | SessionError::NoRecords | SessionError::NoHeaders => {
                ErrorKind::Format
            }
            SessionError::QuerySyntax(_) => ErrorKind::QuerySyntax,
        }
    }
}
