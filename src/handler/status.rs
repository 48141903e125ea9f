use super::types::{Entry, Status};
use crate::workspace::Workspace;
use anyhow::Result;
use crossterm::style::Stylize;
use std::path::Path;
use walkdir::WalkDir;

pub struct StatusHandler {
    workspace: Workspace,
}

impl StatusHandler {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }

    pub fn status(&self, brief: bool) -> Result<()> {
        self.workspace.verify()?;
        log::debug!("Showing status with brief={}", brief);

        let indexed = self.index()?;
        for (group, entries) in &indexed {
            let entries: Vec<&Entry> = entries
                .iter()
                .filter(|entry| !brief || !entry.is_linked())
                .collect();
            if entries.is_empty() {
                continue;
            }

            println!("\n {}", group.as_str().bold());
            for entry in entries {
                println!("   {}", entry);
            }
        }

        if !brief {
            println!(
                "\n{} linked | {} missing | {} conflict",
                Status::Linked,
                Status::Missing,
                Status::Conflict,
            );
        }
        Ok(())
    }

    /// Link state of every file in every group.
    pub fn index(&self) -> Result<Vec<(String, Vec<Entry>)>> {
        let mut indexed = Vec::new();
        for group in self.workspace.groups()? {
            let entries = self.index_group(&group)?;
            indexed.push((group, entries));
        }
        Ok(indexed)
    }

    fn index_group(&self, group: &str) -> Result<Vec<Entry>> {
        let group_dir = self.workspace.root.join(group);
        let mut entries = Vec::new();

        let walker = WalkDir::new(&group_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.file_name() != ".git");

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }

            let managed_path = entry.path().to_path_buf();
            let home_path = self.workspace.home_target(group, &managed_path)?;
            let relpath = home_path
                .strip_prefix(&self.workspace.home)?
                .to_string_lossy()
                .to_string();
            let status = link_status(&home_path, &managed_path);
            log::trace!("{} -> {:?}", relpath, status);

            entries.push(Entry {
                relpath,
                status,
                home_path,
                managed_path,
            });
        }

        Ok(entries)
    }
}

fn link_status(home_path: &Path, managed_path: &Path) -> Status {
    if home_path.symlink_metadata().is_err() {
        return Status::Missing;
    }

    // Resolving covers folded directories, where a parent directory is the link.
    match (home_path.canonicalize(), managed_path.canonicalize()) {
        (Ok(a), Ok(b)) if a == b => Status::Linked,
        _ => Status::Conflict,
    }
}
