use anyhow::Result;
use daybook_core::service::CalendarService;

use crate::render::render_names;

pub fn run(service: &CalendarService) -> Result<()> {
    let names = service.calendar_names()?;
    println!("{}", render_names(&names));
    Ok(())
}
