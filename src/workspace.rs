use crate::config::Config;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The user's home directory together with the managed root that mirrors it.
///
/// Each direct, non-hidden subdirectory of the root is a group, i.e. a stow
/// package. Inside a group, files keep the path they have relative to home.
#[derive(Clone, Debug)]
pub struct Workspace {
    pub home: PathBuf,
    pub root: PathBuf,
    pub stow_flags: Vec<String>,
}

impl Workspace {
    pub fn new(home: PathBuf, root: PathBuf) -> Self {
        Self {
            home,
            root,
            stow_flags: vec!["-v".to_string(), "-R".to_string()],
        }
    }

    pub fn from_config(home: PathBuf, config: &Config) -> Self {
        let root = config.root(&home);
        Self {
            home,
            root,
            stow_flags: config.stow_flags(),
        }
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    /// Fails unless the managed root has been created by `init`.
    pub fn verify(&self) -> Result<()> {
        if !self.exists() {
            bail!("{} is missing. Run `dotties init`", self.root.display());
        }
        Ok(())
    }

    /// Names of all groups in the managed root, sorted.
    pub fn groups(&self) -> Result<Vec<String>> {
        let mut groups = Vec::new();
        let dir = fs::read_dir(&self.root)
            .with_context(|| format!("failed to read {}", self.root.display()))?;

        for entry in dir {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.starts_with('.') {
                groups.push(name);
            }
        }

        groups.sort();
        Ok(groups)
    }

    /// Whether `path`, with all symlinks resolved, lies inside the managed root.
    pub fn is_managed(&self, path: &Path) -> bool {
        let (Ok(path), Ok(root)) = (path.canonicalize(), self.root.canonicalize()) else {
            return false;
        };
        path != root && path.starts_with(&root)
    }

    /// Suggested group name for `src`.
    ///
    /// Files directly in home have no suggestion. Other files suggest their
    /// parent directory and directories suggest themselves, without leading dots.
    pub fn default_name(&self, src: &Path) -> String {
        let name = if src.is_file() {
            match src.parent() {
                Some(parent) if same_file(parent, &self.home) => None,
                Some(parent) => parent.file_name(),
                None => None,
            }
        } else {
            src.file_name()
        };

        match name {
            Some(name) => name.to_string_lossy().trim_start_matches('.').to_string(),
            None => String::new(),
        }
    }

    /// Position of `src`'s parent relative to home.
    pub fn relative_parent(&self, src: &Path) -> Result<PathBuf> {
        let parent = match src.parent() {
            Some(parent) => parent,
            None => bail!("{} has no parent directory", src.display()),
        };

        if let Ok(rel) = parent.strip_prefix(&self.home) {
            return Ok(rel.to_path_buf());
        }

        // Retry with symlinks resolved, e.g. when home itself is a link.
        if let (Ok(parent), Ok(home)) = (parent.canonicalize(), self.home.canonicalize()) {
            if let Ok(rel) = parent.strip_prefix(&home) {
                return Ok(rel.to_path_buf());
            }
        }

        bail!(
            "{} is not inside the home directory {}",
            src.display(),
            self.home.display()
        )
    }

    /// Directory in the managed root that `src` is moved into for group `name`.
    pub fn destination(&self, name: &str, src: &Path) -> Result<PathBuf> {
        let rel = self.relative_parent(src)?;
        Ok(self.root.join(name).join(rel))
    }

    /// Path in home that the managed file of `group` links back to.
    pub fn home_target(&self, group: &str, managed: &Path) -> Result<PathBuf> {
        let group_dir = self.root.join(group);
        let rel = managed
            .strip_prefix(&group_dir)
            .with_context(|| format!("{} is not in group {}", managed.display(), group))?;
        Ok(self.home.join(rel))
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
