//! Calendar workflows: create, load, read, edit and delete.
//!
//! The workflows talk to the user through a [`Prompter`], so the same code
//! drives the terminal UI and scripted tests. Validation errors are reported
//! through [`Prompter::notify`] and the question is asked again; any other
//! error aborts the workflow.

use chrono::Month;
use log::info;

use crate::calendar::{CalendarRecord, NoteResult};
use crate::error::{DaybookError, DaybookResult};
use crate::period::{days_in_month, validate_month, validate_year};
use crate::store::RecordStore;

/// Input hooks the workflows need from a front end.
pub trait Prompter {
    /// Ask for a line of text. An empty answer is allowed.
    fn text(&mut self, prompt: &str) -> DaybookResult<String>;

    fn confirm(&mut self, prompt: &str, default: bool) -> DaybookResult<bool>;

    /// Show a message, e.g. why an answer was rejected.
    fn notify(&mut self, message: &str);
}

/// Ask until `parse` accepts the answer.
fn prompt_until<P, T, F>(prompter: &mut P, prompt: &str, parse: F) -> DaybookResult<T>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> DaybookResult<T>,
{
    loop {
        let input = prompter.text(prompt)?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_validation() => prompter.notify(&e.to_string()),
            Err(e) => return Err(e),
        }
    }
}

fn parse_number(input: &str) -> DaybookResult<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| DaybookError::NotANumber(input.trim().to_string()))
}

/// A custom day count between 1 and the length of the month.
fn parse_day_count(input: &str, year: i32, month: Month) -> DaybookResult<u32> {
    let requested = parse_number(input)?;
    let available = days_in_month(year, month);

    if requested == 0 {
        return Err(DaybookError::InvalidDay {
            day: 0,
            max: available,
        });
    }
    if requested > available {
        return Err(DaybookError::DaysExceedMonth {
            requested,
            available,
        });
    }
    Ok(requested)
}

pub struct CalendarService {
    store: RecordStore,
}

impl CalendarService {
    pub fn new(store: RecordStore) -> Self {
        CalendarService { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn calendar_names(&self) -> DaybookResult<Vec<String>> {
        self.store.names()
    }

    /// Collect a new calendar from the user. The result is not saved yet.
    pub fn create<P: Prompter + ?Sized>(&self, prompter: &mut P) -> DaybookResult<CalendarRecord> {
        let name = self.prompt_name(prompter)?;

        let year = prompt_until(
            prompter,
            "For which year do you want to generate a calendar?",
            validate_year,
        )?;
        let month = prompt_until(
            prompter,
            "For which month do you want to generate a calendar?",
            validate_month,
        )?;

        let available = days_in_month(year, month);
        let use_default = prompter.confirm(
            &format!(
                "Do you want to use the default amount of days for this month ({})?",
                available
            ),
            true,
        )?;

        let days_override = if use_default {
            None
        } else {
            let prompt = format!(
                "For how many days do you want to run the calendar in {}?",
                month.name()
            );
            Some(prompt_until(prompter, &prompt, |input| {
                parse_day_count(input, year, month)
            })?)
        };

        let mut record = CalendarRecord::new(&name, month, year, days_override)?;

        for day in 1..=record.effective_day_count() {
            let text = prompter.text(&format!("Enter data for day {}", day))?;
            record.add_note(day, text)?;
        }

        info!("Created calendar {}", record);
        Ok(record)
    }

    pub fn save(&self, record: &CalendarRecord) -> DaybookResult<()> {
        self.store.upsert(record)
    }

    pub fn load(&self, name: &str) -> DaybookResult<CalendarRecord> {
        self.store.find_record(name)
    }

    /// Ask for a day and return what is stored for it.
    pub fn read_entry<P: Prompter + ?Sized>(
        &self,
        prompter: &mut P,
        record: &CalendarRecord,
    ) -> DaybookResult<(u32, NoteResult)> {
        let day = prompt_day(
            prompter,
            record,
            "For which day do you want to read the data?",
        )?;
        Ok((day, record.get_notes(day)))
    }

    /// Ask for a day and its new text, overwrite the day and save.
    pub fn edit_entry<P: Prompter + ?Sized>(
        &self,
        prompter: &mut P,
        record: &mut CalendarRecord,
    ) -> DaybookResult<u32> {
        let day = prompt_day(prompter, record, "Data of which day to edit?")?;
        let text = prompter.text("New data")?;
        self.replace_and_save(record, day, text)?;
        Ok(day)
    }

    pub fn replace_and_save(
        &self,
        record: &mut CalendarRecord,
        day: u32,
        text: impl Into<String>,
    ) -> DaybookResult<()> {
        record.replace_note(day, text)?;
        self.store.upsert(record)
    }

    pub fn delete(&self, name: &str) -> DaybookResult<()> {
        match self.store.delete_by_name(name)? {
            0 => Err(DaybookError::NotFound(name.to_string())),
            _ => Ok(()),
        }
    }

    fn prompt_name<P: Prompter + ?Sized>(&self, prompter: &mut P) -> DaybookResult<String> {
        prompt_until(
            prompter,
            "What do you want to call this calendar?",
            |input| {
                let name = input.trim();
                if name.is_empty() {
                    return Err(DaybookError::EmptyName);
                }
                if !self.store.is_name_unique(name)? {
                    return Err(DaybookError::DuplicateName(name.to_string()));
                }
                Ok(name.to_string())
            },
        )
    }
}

fn prompt_day<P: Prompter + ?Sized>(
    prompter: &mut P,
    record: &CalendarRecord,
    prompt: &str,
) -> DaybookResult<u32> {
    prompt_until(prompter, prompt, |input| {
        let day = parse_number(input)?;
        record.check_day(day)?;
        Ok(day)
    })
}
