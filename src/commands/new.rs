use anyhow::Result;
use daybook_core::service::CalendarService;
use dialoguer::Select;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::prompt::TerminalPrompter;

const SAVE_MENU: [&str; 2] = ["Save calendar", "Back to main menu"];

/// Collect a new calendar and offer to save it.
pub fn run(service: &CalendarService) -> Result<()> {
    let record = service.create(&mut TerminalPrompter)?;

    println!();
    println!("{}", record.render());
    println!();

    let selection = Select::new()
        .with_prompt("Choose an option")
        .items(&SAVE_MENU)
        .default(0)
        .interact()?;

    if selection == 0 {
        service.save(&record)?;
        println!("{}", "  Calendar saved successfully.".green());
    }

    Ok(())
}
