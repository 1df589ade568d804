use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::source::FsCaptureSource;

/// Capture filename used when none is given on the command line.
pub const DEFAULT_CAPTURE_FILE: &str = "cart.chlsj";

/// Global configuration loaded from `~/.config/chsess/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChsessConfig {
    /// Directory holding `charles/ios/`. If missing, the working directory is used.
    #[serde(default)]
    pub root_dir: Option<PathBuf>,
    /// Capture file loaded by default.
    #[serde(default = "default_capture_file")]
    pub capture_file: String,
}

fn default_capture_file() -> String {
    DEFAULT_CAPTURE_FILE.to_string()
}

impl Default for ChsessConfig {
    fn default() -> Self {
        Self {
            root_dir: None,
            capture_file: default_capture_file(),
        }
    }
}

impl ChsessConfig {
    /// Capture source rooted where this config says.
    pub fn capture_source(&self) -> FsCaptureSource {
        match &self.root_dir {
            Some(root) => FsCaptureSource::with_root(root),
            None => FsCaptureSource::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("chsess")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ChsessConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ChsessConfig> {
    if !path.exists() {
        let default_cfg = ChsessConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ChsessConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
