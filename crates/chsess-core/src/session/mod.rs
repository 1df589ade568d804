//! Session store: headers and query params replayed from a Charles capture.
//!
//! A capture is decoded once (or again, to refresh) and the extracted maps are
//! served to whatever builds outgoing requests. Headers are replaced on each
//! decode; params accumulate.

mod allow_list;
mod error;
mod store;

pub use allow_list::{FORM_CONTENT_TYPE, HEADER_ALLOW_LIST, PARAM_ALLOW_LIST};
pub use error::{ErrorKind, SessionError};
pub use store::{SessionStore, CAPTURE_SUBDIR};

use std::collections::HashMap;

use crate::source::CaptureSource;

/// Device session consumed by request-building code.
pub trait SessionProvider: Send + Sync {
    /// Loads the named capture from the capture root.
    fn load_config(&self, name: &str) -> Result<(), SessionError>;

    fn headers(&self) -> HashMap<String, String>;

    fn query_params(&self) -> HashMap<String, String>;
}

impl<S> SessionProvider for SessionStore<S>
where
    S: CaptureSource + Send + Sync,
{
    fn load_config(&self, name: &str) -> Result<(), SessionError> {
        self.load_from_file(name)
    }

    fn headers(&self) -> HashMap<String, String> {
        SessionStore::headers(self)
    }

    fn query_params(&self) -> HashMap<String, String> {
        SessionStore::query_params(self)
    }
}
