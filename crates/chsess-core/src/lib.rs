pub mod config;
pub mod logging;

pub mod capture;
pub mod query;
pub mod session;
pub mod source;

pub use session::{SessionError, SessionProvider, SessionStore};
