//! `chsess decode <path>` – decode a capture outside the capture root.

use anyhow::{Context, Result};
use chsess_core::source::CaptureSource;
use chsess_core::SessionStore;
use std::path::Path;

use super::render_session;
use crate::cli::Section;

pub fn run_decode<S: CaptureSource>(
    store: &SessionStore<S>,
    path: &Path,
    json: bool,
) -> Result<()> {
    store
        .load_from_path(path)
        .with_context(|| format!("decode capture {}", path.display()))?;
    let out = render_session(&store.headers(), &store.query_params(), Section::All, json)?;
    print!("{out}");
    Ok(())
}
