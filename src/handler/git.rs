use crate::cmd::Runner;
use crate::workspace::Workspace;
use anyhow::{bail, Result};

/// Runs arbitrary git commands in the managed root.
pub struct GitHandler {
    runner: Box<dyn Runner>,
    workspace: Workspace,
}

impl GitHandler {
    pub fn new(runner: Box<dyn Runner>, workspace: Workspace) -> Self {
        Self { runner, workspace }
    }

    pub fn git(&self, args: &[String]) -> Result<()> {
        self.workspace.verify()?;
        if !self.runner.run(&self.workspace.root, "git", args)? {
            bail!("git {} failed", args.join(" "));
        }
        Ok(())
    }
}
