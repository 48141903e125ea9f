use super::stow::{restow, stow_args};
use crate::cmd::Runner;
use crate::files;
use crate::path;
use crate::prompt::Prompt;
use crate::workspace::Workspace;
use anyhow::{bail, Result};
use std::path::Path;

#[derive(Default)]
pub struct AddOptions {
    // Only print what would be moved and linked.
    pub dryrun: bool,
}

/// Moves a file or directory into a group of the managed root and links it back.
pub struct AddHandler {
    prompt: Box<dyn Prompt>,
    runner: Box<dyn Runner>,
    workspace: Workspace,
    options: AddOptions,
}

impl AddHandler {
    pub fn new(
        prompt: Box<dyn Prompt>,
        runner: Box<dyn Runner>,
        workspace: Workspace,
        options: AddOptions,
    ) -> Self {
        Self {
            prompt,
            runner,
            workspace,
            options,
        }
    }

    pub fn add(&self, path: &Path) -> Result<()> {
        self.workspace.verify()?;

        let src = path::absolute(path)?;
        if !src.exists() {
            bail!("Nope! {} does NOT exist.", src.display());
        }

        if self.workspace.is_managed(&src) {
            let resolved = src.canonicalize()?;
            println!("Already managed by dotties: {}", resolved.display());
            println!("No changes were made.");
            return Ok(());
        }

        if let (Ok(root), Ok(resolved)) = (self.workspace.root.canonicalize(), src.canonicalize())
        {
            if root.starts_with(&resolved) {
                bail!("{} contains the managed root", src.display());
            }
        }

        // Reject paths outside home before asking for a name.
        self.workspace.relative_parent(&src)?;
        let file_name = match src.file_name() {
            Some(name) => name.to_os_string(),
            None => bail!("unable to resolve file name of {}", src.display()),
        };

        let default = self.workspace.default_name(&src);
        log::debug!("Default group name for {:?}: {:?}", src, default);
        let name = self.ask_name(&default)?;

        let dest = self.workspace.destination(&name, &src)?;
        let target = dest.join(&file_name);
        if target.symlink_metadata().is_ok() {
            bail!("{} already exists", target.display());
        }

        let groups = vec![name];
        if self.options.dryrun {
            println!("Would move {} -> {}", src.display(), dest.display());
            println!("Would run: stow {}", stow_args(&self.workspace, &groups).join(" "));
            return Ok(());
        }

        files::create_dirs(&dest)?;
        println!("Moving {} -> {}", src.display(), dest.display());
        files::move_path(&src, &target)?;

        restow(self.runner.as_ref(), &self.workspace, &groups)?;
        Ok(())
    }

    fn ask_name(&self, default: &str) -> Result<String> {
        loop {
            let name = self.prompt.input("Name", default)?;
            if name.is_empty() {
                println!("Name cannot be empty.");
            } else if name.starts_with('.') || name.contains(['/', '\\']) {
                println!("Name must be a plain directory name without a leading dot.");
            } else {
                return Ok(name);
            }
        }
    }
}
