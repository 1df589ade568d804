//! CLI command handlers, one file per command.

mod check;
mod config_path;
mod decode;
mod show;

pub use check::run_check;
pub use config_path::run_config_path;
pub use decode::run_decode;
pub use show::run_show;

pub(crate) use show::render_session;
