use anyhow::Result;
use daybook_core::CalendarRecord;
use daybook_core::service::CalendarService;
use dialoguer::Select;
use owo_colors::OwoColorize;

use super::select_calendar;
use crate::render::{Render, render_notes};
use crate::utils::prompt::TerminalPrompter;

const MAIN_MENU: [&str; 4] = [
    "Create a new calendar",
    "Load an existing calendar",
    "Delete a calendar",
    "Quit",
];

const CALENDAR_MENU: [&str; 3] = ["Read entry", "Edit entry", "Back to main menu"];

/// Interactive main menu. Errors are shown and the menu comes back.
pub fn run(service: &CalendarService) -> Result<()> {
    loop {
        println!();
        let selection = Select::new()
            .with_prompt("What do you want to do?")
            .items(&MAIN_MENU)
            .default(0)
            .interact()?;

        let outcome = match selection {
            0 => super::new::run(service),
            1 => load(service),
            2 => super::delete::interactive(service),
            _ => return Ok(()),
        };

        if let Err(e) = outcome {
            eprintln!("{}", format!("Error: {:#}", e).red());
        }
    }
}

fn load(service: &CalendarService) -> Result<()> {
    let Some(name) = select_calendar(service, "Which calendar do you want to load?")? else {
        return Ok(());
    };

    let mut record = service.load(&name)?;
    println!();
    println!("{}", record.render());
    calendar_menu(service, &mut record)
}

fn calendar_menu(service: &CalendarService, record: &mut CalendarRecord) -> Result<()> {
    let mut prompter = TerminalPrompter;

    loop {
        println!();
        let selection = Select::new()
            .with_prompt(format!("Calendar '{}'", record.name()))
            .items(&CALENDAR_MENU)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let (day, notes) = service.read_entry(&mut prompter, record)?;
                println!("{}", render_notes(record.name(), day, &notes));
            }
            1 => {
                let day = service.edit_entry(&mut prompter, record)?;
                println!("{}", format!("  Updated day {}", day).green());
                println!("{}", record.render());
            }
            _ => return Ok(()),
        }
    }
}
