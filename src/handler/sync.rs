use super::stow::{report_failure, restow};
use crate::cmd::{to_strings, Runner};
use crate::workspace::Workspace;
use anyhow::Result;

pub struct SyncOptions {
    // Commit all changes in the managed root with this message first.
    pub commit: Option<String>,
    pub pull: bool,
    pub push: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            commit: None,
            pull: true,
            push: false,
        }
    }
}

/// Brings the managed root up to date with its remote and relinks every group.
pub struct SyncHandler {
    runner: Box<dyn Runner>,
    workspace: Workspace,
    options: SyncOptions,
}

impl SyncHandler {
    pub fn new(runner: Box<dyn Runner>, workspace: Workspace, options: SyncOptions) -> Self {
        Self {
            runner,
            workspace,
            options,
        }
    }

    pub fn sync(&self) -> Result<()> {
        self.workspace.verify()?;

        if let Some(msg) = &self.options.commit {
            if !self.commit(msg)? {
                return Ok(());
            }
        }

        if self.options.pull && !self.git(&["pull"])? {
            return Ok(());
        }

        if self.options.push && !self.git(&["push"])? {
            return Ok(());
        }

        let groups = self.workspace.groups()?;
        if groups.is_empty() {
            log::info!("No groups to link");
            return Ok(());
        }
        restow(self.runner.as_ref(), &self.workspace, &groups)?;
        Ok(())
    }

    fn commit(&self, msg: &str) -> Result<bool> {
        let args = to_strings(&["status", "--porcelain"]);
        let status = self.runner.capture(&self.workspace.root, "git", &args)?;
        if !status.success {
            report_failure(&status);
            return Ok(false);
        }
        if status.stdout.trim().is_empty() {
            println!("Nothing to commit.");
            return Ok(true);
        }

        log::info!("Creating git commit with message: {msg}");
        Ok(self.git(&["add", "."])? && self.git(&["commit", "-m", msg])?)
    }

    fn git(&self, args: &[&str]) -> Result<bool> {
        let output = self
            .runner
            .capture(&self.workspace.root, "git", &to_strings(args))?;
        if !output.success {
            report_failure(&output);
            return Ok(false);
        }

        let text = output.text();
        if !text.is_empty() {
            println!("{}", text);
        }
        Ok(true)
    }
}
