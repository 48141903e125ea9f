use crate::cmd::{Output, Runner};
use crate::path_str;
use crate::workspace::Workspace;
use anyhow::Result;
use crossterm::style::Stylize;

/// Arguments for restowing `groups` into home.
pub fn stow_args(workspace: &Workspace, groups: &[String]) -> Vec<String> {
    let mut args = workspace.stow_flags.clone();
    args.push("-t".to_string());
    args.push(path_str!(workspace.home));
    args.extend(groups.iter().cloned());
    args
}

/// Runs stow from inside the managed root, linking every file of `groups`
/// back into home. Returns false when stow failed.
pub fn restow(runner: &dyn Runner, workspace: &Workspace, groups: &[String]) -> Result<bool> {
    let args = stow_args(workspace, groups);
    println!("stow {}", args.join(" "));

    let output = runner.capture(&workspace.root, "stow", &args)?;
    if !output.success {
        report_failure(&output);
        return Ok(false);
    }

    // stow -v reports its links on stderr.
    for text in [output.stdout.trim_end(), output.stderr.trim_end()] {
        if !text.is_empty() {
            println!("{}", text);
        }
    }
    Ok(true)
}

pub fn report_failure(output: &Output) {
    let text = output.text();
    if text.is_empty() {
        eprintln!("{}", "command failed without output".red());
    } else {
        eprintln!("{}", text.red());
    }
}
