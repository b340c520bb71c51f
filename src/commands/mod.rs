pub mod delete;
pub mod edit;
pub mod list;
pub mod menu;
pub mod new;
pub mod read;
pub mod show;

use anyhow::Result;
use daybook_core::service::CalendarService;
use dialoguer::Select;
use owo_colors::OwoColorize;

/// Let the user pick a stored calendar. None when there is nothing to pick.
pub fn select_calendar(service: &CalendarService, prompt: &str) -> Result<Option<String>> {
    let mut names = service.calendar_names()?;

    if names.is_empty() {
        println!("{}", "No calendars yet".dimmed());
        return Ok(None);
    }

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&names)
        .default(0)
        .interact()?;

    Ok(Some(names.swap_remove(selection)))
}
