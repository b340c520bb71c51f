use anyhow::Result;
use daybook_core::service::CalendarService;
use owo_colors::OwoColorize;

use crate::render::Render;

/// Overwrite the notes of a day and save.
pub fn run(service: &CalendarService, name: &str, day: u32, text: String) -> Result<()> {
    let mut record = service.load(name)?;
    service.replace_and_save(&mut record, day, text)?;

    println!("{}", format!("  Updated day {} of '{}'", day, name).green());
    println!("{}", record.render());
    Ok(())
}
