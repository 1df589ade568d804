//! `chsess check [file]` – load a capture and report which headers it fills.

use anyhow::{Context, Result};
use chsess_core::session::HEADER_ALLOW_LIST;
use chsess_core::source::CaptureSource;
use chsess_core::SessionStore;
use std::collections::HashMap;

pub fn run_check<S: CaptureSource>(store: &SessionStore<S>, name: &str) -> Result<()> {
    let path = store.capture_path(name)?;
    store
        .load_from_path(&path)
        .with_context(|| format!("load capture {name}"))?;

    let headers = store.headers();
    let missing = missing_headers(&headers);
    println!("capture: {}", path.display());
    println!(
        "headers: {}/{} filled",
        HEADER_ALLOW_LIST.len() - missing.len(),
        HEADER_ALLOW_LIST.len()
    );
    println!("params:  {}", store.query_params().len());
    if !missing.is_empty() {
        println!("empty:   {}", missing.join(", "));
    }
    Ok(())
}

/// Allow-listed headers with an empty value, in allow-list order.
fn missing_headers(headers: &HashMap<String, String>) -> Vec<&'static str> {
    HEADER_ALLOW_LIST
        .iter()
        .copied()
        .filter(|name| headers.get(*name).map_or(true, |v| v.is_empty()))
        .collect()
}
