use anyhow::{bail, Context, Result};
use directories::BaseDirs;
use lazy_static::lazy_static;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Name of the managed root directory under home.
pub const ROOT_NAME: &str = ".dots";

/// Name of the configuration file in the local config directory.
pub const CONFIG_NAME: &str = "dotties.toml";

lazy_static! {
    static ref BASE_DIRS: Option<BaseDirs> = BaseDirs::new();
}

pub fn home_dir() -> Result<PathBuf> {
    match home::home_dir() {
        Some(home) => Ok(home),
        None => bail!("unable to resolve home directory"),
    }
}

/// Path to ~/.config/dotties.toml, or the platform equivalent.
pub fn config_path() -> Result<PathBuf> {
    match BASE_DIRS.as_ref() {
        Some(dirs) => Ok(dirs.config_dir().join(CONFIG_NAME)),
        None => bail!("unable to resolve local config directory"),
    }
}

/// Expands a leading `~` against `home`. Relative paths are taken relative to home.
pub fn expand_home(home: &Path, path: &str) -> PathBuf {
    if path == "~" {
        return home.to_path_buf();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => home.join(path),
    }
}

/// Makes `path` absolute against the current directory without following symlinks.
/// `.` and `..` components are resolved lexically.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().context("unable to resolve current directory")?;
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            c => normalized.push(c),
        }
    }
    Ok(normalized)
}
