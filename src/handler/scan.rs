use super::types::Only;
use crate::workspace::Workspace;
use anyhow::Result;
use crossterm::style::Stylize;
use glob::Pattern as GlobPattern;
use std::fs;
use std::path::{Path, PathBuf};

/// Suggests dotfiles in home that are not managed yet.
pub struct ScanHandler {
    workspace: Workspace,
    ignore: Vec<GlobPattern>,
    only: Option<Only>,
}

impl ScanHandler {
    pub fn new(workspace: Workspace, ignore: &[String], only: Option<Only>) -> Result<Self> {
        let mut patterns = Vec::new();
        for p in ignore {
            patterns.push(GlobPattern::new(p)?);
        }

        Ok(Self {
            workspace,
            ignore: patterns,
            only,
        })
    }

    pub fn scan(&self) -> Result<()> {
        let candidates = self.candidates()?;
        if candidates.is_empty() {
            println!("Nothing new to manage.");
            return Ok(());
        }

        println!("Found {} unmanaged dot files:\n", candidates.len());
        for rel in candidates {
            println!("  {} ~/{}", "dotties add".dark_grey(), rel.display());
        }
        Ok(())
    }

    /// Unmanaged paths relative to home, sorted.
    pub fn candidates(&self) -> Result<Vec<PathBuf>> {
        let home = &self.workspace.home;
        let mut candidates = Vec::new();

        for name in list_dir(home)? {
            if !name.starts_with('.') || name == ".config" {
                continue;
            }
            self.consider(PathBuf::from(&name), &name, &mut candidates);
        }

        let config = home.join(".config");
        if config.is_dir() {
            for name in list_dir(&config)? {
                let rel = Path::new(".config").join(&name);
                self.consider(rel, &name, &mut candidates);
            }
        }

        candidates.sort();
        Ok(candidates)
    }

    fn consider(&self, rel: PathBuf, name: &str, candidates: &mut Vec<PathBuf>) {
        let path = self.workspace.home.join(&rel);

        if path == self.workspace.root || self.workspace.is_managed(&path) {
            log::debug!("Skipping managed {:?}", path);
            return;
        }
        if self.ignore.iter().any(|p| p.matches(name)) {
            log::debug!("Skipping ignored {:?}", path);
            return;
        }
        if let Some(only) = &self.only {
            if !only.matches(&rel.to_string_lossy()) {
                return;
            }
        }

        candidates.push(rel);
    }
}

fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().to_string());
    }
    Ok(names)
}
