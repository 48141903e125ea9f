use super::stow::{report_failure, restow};
use crate::cmd::Runner;
use crate::files;
use crate::path_str;
use crate::prompt::Prompt;
use crate::workspace::Workspace;
use anyhow::Result;

const USAGE: &str = "Try,

dotties add path/to/folder_or_file
    or
\"dotties scan\" to scan and suggest dot files";

/// Creates the managed root, either fresh or from a git repository.
pub struct InitHandler {
    prompt: Box<dyn Prompt>,
    runner: Box<dyn Runner>,
    workspace: Workspace,
}

impl InitHandler {
    pub fn new(prompt: Box<dyn Prompt>, runner: Box<dyn Runner>, workspace: Workspace) -> Self {
        Self {
            prompt,
            runner,
            workspace,
        }
    }

    pub fn init(&self) -> Result<()> {
        if self.workspace.exists() {
            println!("{} already exists. {}", self.workspace.root.display(), USAGE);
            return Ok(());
        }

        let fetch = self
            .prompt
            .confirm("Would you like to fetch your dotties from a git repo", false)?;

        let url = if fetch {
            self.prompt.input("git-url", "")?
        } else {
            String::new()
        };

        if url.is_empty() {
            self.create()
        } else {
            self.clone_from(&url)
        }
    }

    fn clone_from(&self, url: &str) -> Result<()> {
        log::debug!("Cloning {} into {:?}", url, self.workspace.root);

        let args = vec![
            "clone".to_string(),
            url.to_string(),
            path_str!(self.workspace.root),
        ];
        let output = self.runner.capture(&self.workspace.home, "git", &args)?;
        if !output.success {
            report_failure(&output);
            return Ok(());
        }
        println!("{}", output.text());

        let groups = self.workspace.groups()?;
        if groups.is_empty() {
            log::warn!("No groups found in {:?}, nothing to link", self.workspace.root);
            return Ok(());
        }

        restow(self.runner.as_ref(), &self.workspace, &groups)?;
        Ok(())
    }

    fn create(&self) -> Result<()> {
        log::debug!("Creating {:?}", self.workspace.root);
        files::create_dirs(&self.workspace.root)?;

        let output = self
            .runner
            .capture(&self.workspace.root, "git", &["init".to_string()])?;
        if !output.success {
            report_failure(&output);
            return Ok(());
        }
        println!("{}", output.text());
        Ok(())
    }
}
