use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Captured result of an external command.
#[derive(Clone, Debug, Default)]
pub struct Output {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl Output {
    /// Text worth showing the user: stdout, or stderr when stdout is empty.
    pub fn text(&self) -> &str {
        if self.stdout.trim().is_empty() {
            self.stderr.trim_end()
        } else {
            self.stdout.trim_end()
        }
    }
}

/// Used to run external commands, such as git and stow.
pub trait Runner {
    /// Runs the command with stdout and stderr captured.
    fn capture(&self, cwd: &Path, program: &str, args: &[String]) -> Result<Output>;

    /// Runs the command attached to the terminal.
    fn run(&self, cwd: &Path, program: &str, args: &[String]) -> Result<bool>;
}

#[derive(Default)]
pub struct CmdRunner;

impl Runner for CmdRunner {
    fn capture(&self, cwd: &Path, program: &str, args: &[String]) -> Result<Output> {
        let mut cmd = build(cwd, program, args);
        let output = cmd
            .output()
            .with_context(|| format!("failed to execute {program}"))?;
        Ok(Output {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }

    fn run(&self, cwd: &Path, program: &str, args: &[String]) -> Result<bool> {
        let mut cmd = build(cwd, program, args);
        let status = cmd
            .status()
            .with_context(|| format!("failed to execute {program}"))?;
        Ok(status.success())
    }
}

fn build(cwd: &Path, program: &str, args: &[String]) -> Command {
    log::info!(
        "Running {} with args '{}' in {}",
        program,
        args.join(" "),
        cwd.display()
    );

    let mut cmd = Command::new(program);
    cmd.current_dir(cwd);
    cmd.args(args);
    cmd
}

pub fn to_strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}
