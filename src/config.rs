use crate::path::{expand_home, ROOT_NAME};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_STOW_FLAGS: [&str; 2] = ["-v", "-R"];

const DEFAULT_SCAN_IGNORE: [&str; 12] = [
    ".cache",
    ".local",
    ".git",
    ".Trash",
    ".cargo",
    ".rustup",
    ".npm",
    ".mozilla",
    ".vscode-server",
    ".*_history",
    ".DS_Store",
    ".lesshst",
];

/// Config represents the optional ~/.config/dotties.toml file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Managed root, defaults to ~/.dots.
    root: Option<String>,
    #[serde(default)]
    stow: StowConfig,
    #[serde(default)]
    scan: ScanConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StowConfig {
    flags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScanConfig {
    ignore: Option<Vec<String>>,
}

impl Config {
    pub fn from(s: &str) -> Result<Config> {
        let config: Config = toml::from_str(s)?;
        Ok(config)
    }

    /// Loads the file at `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Ok(Config::default());
        }

        let s = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Config::from(&s).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn root(&self, home: &Path) -> PathBuf {
        match &self.root {
            Some(root) => expand_home(home, root),
            None => home.join(ROOT_NAME),
        }
    }

    pub fn stow_flags(&self) -> Vec<String> {
        match &self.stow.flags {
            Some(flags) => flags.clone(),
            None => DEFAULT_STOW_FLAGS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn scan_ignore(&self) -> Vec<String> {
        match &self.scan.ignore {
            Some(ignore) => ignore.clone(),
            None => DEFAULT_SCAN_IGNORE.iter().map(|s| s.to_string()).collect(),
        }
    }
}
