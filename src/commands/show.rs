use anyhow::{Context, Result};
use daybook_core::service::CalendarService;

use crate::render::Render;

pub fn run(service: &CalendarService, name: &str, json: bool) -> Result<()> {
    if json {
        let raw = service.store().find_by_name(name)?;
        let pretty = serde_json::to_string_pretty(&raw)
            .with_context(|| format!("Failed to serialize calendar '{}'", name))?;
        println!("{}", pretty);
        return Ok(());
    }

    let record = service.load(name)?;
    println!("{}", record.render());
    Ok(())
}
