//! `chsess config-path` – print the config file location.

use anyhow::Result;
use chsess_core::config;

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
