//! dialoguer-backed prompts for the calendar workflows.

use daybook_core::error::{DaybookError, DaybookResult};
use daybook_core::service::Prompter;
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str) -> DaybookResult<String> {
        Input::<String>::new()
            .with_prompt(format!("  {}", prompt))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| DaybookError::Input(e.to_string()))
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> DaybookResult<bool> {
        Confirm::new()
            .with_prompt(format!("  {}", prompt))
            .default(default)
            .interact()
            .map_err(|e| DaybookError::Input(e.to_string()))
    }

    fn notify(&mut self, message: &str) {
        eprintln!("  {}", message.red());
    }
}
