use anyhow::Result;
use daybook_core::service::CalendarService;

use crate::render::render_notes;

pub fn run(service: &CalendarService, name: &str, day: u32) -> Result<()> {
    let record = service.load(name)?;
    record.check_day(day)?;

    println!("{}", render_notes(record.name(), day, &record.get_notes(day)));
    Ok(())
}
