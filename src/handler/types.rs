use anyhow::Result;
use crossterm::style::Stylize;
use glob::Pattern as GlobPattern;
use regex::Regex;
use std::fmt;
use std::path::PathBuf;

pub enum Pattern {
    Glob(GlobPattern),
    Regex(Regex),
}

impl Pattern {
    pub fn matches(&self, s: &str) -> bool {
        match self {
            Pattern::Glob(g) => g.matches(s),
            Pattern::Regex(r) => r.is_match(s),
        }
    }
}

/// Restricts output to paths matching any of the patterns.
pub struct Only {
    pub patterns: Vec<Pattern>,
}

impl Only {
    pub fn from_glob(patterns: &[String]) -> Result<Self> {
        let mut ps = Vec::new();
        for p in patterns {
            ps.push(Pattern::Glob(GlobPattern::new(p)?));
        }
        Ok(Self { patterns: ps })
    }

    pub fn from_regex(patterns: &[String]) -> Result<Self> {
        let mut ps = Vec::new();
        for p in patterns {
            ps.push(Pattern::Regex(Regex::new(p)?));
        }
        Ok(Self { patterns: ps })
    }

    pub fn matches(&self, s: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(s))
    }
}

/// Link state of a single managed file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    // The home path resolves to the managed file.
    Linked,
    // Nothing exists at the home path.
    Missing,
    // Something else occupies the home path.
    Conflict,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Linked => write!(f, "{}", "✓".green()),
            Status::Missing => write!(f, "{}", "?".yellow()),
            Status::Conflict => write!(f, "{}", "✗".red()),
        }
    }
}

pub struct Entry {
    // Path relative to home, e.g. .config/nvim/init.lua
    pub relpath: String,
    pub status: Status,
    pub home_path: PathBuf,
    pub managed_path: PathBuf,
}

impl Entry {
    pub fn is_linked(&self) -> bool {
        self.status == Status::Linked
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~/{}", self.status, self.relpath)
    }
}
