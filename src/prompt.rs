use anyhow::Result;
use inquire::{Confirm, Text};

pub trait Prompt {
    fn prompt(&self, msg: &str) -> Result<String>;

    /// Asks for a line of input. An empty answer yields `default`.
    fn input(&self, msg: &str, default: &str) -> Result<String> {
        let msg = format!("{msg} [{default}]:");
        let answer = self.prompt(&msg)?;
        let answer = answer.trim();

        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    fn confirm(&self, msg: &str, default_yes: bool) -> Result<bool> {
        let query = if default_yes { "[Y/n]" } else { "[y/N]" };

        let msg = format!("{msg}? {query} ");
        let answer = self.prompt(&msg)?;

        let answer = match answer.to_lowercase().trim() {
            "" => default_yes,
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => false,
        };

        Ok(answer)
    }
}

/// Reads answers from the terminal.
pub struct StdinPrompt {}

impl Prompt for StdinPrompt {
    fn prompt(&self, msg: &str) -> Result<String> {
        let answer = Text::new(msg).prompt()?;
        Ok(answer.trim().to_string())
    }

    fn input(&self, msg: &str, default: &str) -> Result<String> {
        if default.is_empty() {
            return self.prompt(msg);
        }
        let answer = Text::new(msg).with_default(default).prompt()?;
        Ok(answer.trim().to_string())
    }

    fn confirm(&self, msg: &str, default_yes: bool) -> Result<bool> {
        let msg = format!("{msg}?");
        let answer = Confirm::new(&msg).with_default(default_yes).prompt()?;
        Ok(answer)
    }
}
