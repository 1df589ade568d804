//! `chsess show [file]` – print headers and params extracted from a capture.

use anyhow::{Context, Result};
use chsess_core::SessionProvider;
use std::collections::{BTreeMap, HashMap};

use crate::cli::Section;

pub fn run_show(
    session: &dyn SessionProvider,
    name: &str,
    section: Section,
    json: bool,
) -> Result<()> {
    session
        .load_config(name)
        .with_context(|| format!("load capture {name}"))?;
    let out = render_session(&session.headers(), &session.query_params(), section, json)?;
    print!("{out}");
    Ok(())
}

/// Renders the selected maps sorted by key, as JSON or `name: value` lines.
pub(crate) fn render_session(
    headers: &HashMap<String, String>,
    params: &HashMap<String, String>,
    section: Section,
    json: bool,
) -> Result<String> {
    let headers: BTreeMap<_, _> = headers.iter().collect();
    let params: BTreeMap<_, _> = params.iter().collect();

    if json {
        let value = match section {
            Section::Headers => serde_json::to_value(&headers)?,
            Section::Params => serde_json::to_value(&params)?,
            Section::All => serde_json::json!({ "headers": headers, "params": params }),
        };
        return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
    }

    let mut out = String::new();
    let mut push_map = |title: &str, map: &BTreeMap<&String, &String>| {
        out.push_str(&format!("[{title}]\n"));
        for (k, v) in map {
            out.push_str(&format!("{k}: {v}\n"));
        }
    };
    match section {
        Section::Headers => push_map("headers", &headers),
        Section::Params => push_map("params", &params),
        Section::All => {
            push_map("headers", &headers);
            push_map("params", &params);
        }
    }
    Ok(out)
}
