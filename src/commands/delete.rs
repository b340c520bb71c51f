use anyhow::Result;
use daybook_core::service::CalendarService;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use super::select_calendar;

pub fn run(service: &CalendarService, name: &str, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete calendar '{}'?", name))
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    service.delete(name)?;
    println!("{}", format!("  Deleted: {}", name).green());
    Ok(())
}

/// Pick a calendar from the store and delete it.
pub fn interactive(service: &CalendarService) -> Result<()> {
    match select_calendar(service, "Which calendar do you want to delete?")? {
        Some(name) => run(service, &name, false),
        None => Ok(()),
    }
}
