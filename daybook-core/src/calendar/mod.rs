//! Calendar records: one named month of day notes.

mod grid;
pub(crate) mod schema;

pub use grid::{Cell, MonthGrid};
pub use schema::RawRecord;

use chrono::Month;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{DaybookError, DaybookResult};
use crate::period::{
    days_in_month, sunday_first_column, validate_month, validate_year, weekday_of_first,
};

/// What is stored for a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteResult {
    Found(Vec<String>),
    /// The day was saved with a single empty note.
    EmptyMarker,
    NoneStored,
}

impl NoteResult {
    /// Found notes joined for display.
    pub fn joined(&self) -> Option<String> {
        match self {
            NoteResult::Found(notes) => Some(notes.join(", ")),
            NoteResult::EmptyMarker | NoteResult::NoneStored => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRecord {
    name: String,
    month: Month,
    year: i32,
    days_override: Option<u32>,
    notes: BTreeMap<u32, Vec<String>>,
    legacy_days: Option<u32>,
}

impl CalendarRecord {
    /// Build a record from user-entered month and year strings.
    pub fn create(
        name: &str,
        month: &str,
        year: &str,
        days_override: Option<u32>,
    ) -> DaybookResult<Self> {
        let month = validate_month(month)?;
        let year = validate_year(year)?;
        Self::new(name, month, year, days_override)
    }

    /// An override of 0 means "use the whole month".
    pub fn new(
        name: &str,
        month: Month,
        year: i32,
        days_override: Option<u32>,
    ) -> DaybookResult<Self> {
        if name.trim().is_empty() {
            return Err(DaybookError::EmptyName);
        }
        if !(1900..=2099).contains(&year) {
            return Err(DaybookError::InvalidYear(year.to_string()));
        }

        let available = days_in_month(year, month);
        let days_override = days_override.filter(|days| *days != 0);
        if let Some(requested) = days_override {
            if requested > available {
                return Err(DaybookError::DaysExceedMonth {
                    requested,
                    available,
                });
            }
        }

        Ok(CalendarRecord {
            name: name.to_string(),
            month,
            year,
            days_override,
            notes: BTreeMap::new(),
            legacy_days: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn days_override(&self) -> Option<u32> {
        self.days_override
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// The override if set, else the length of the month.
    pub fn effective_day_count(&self) -> u32 {
        self.days_override.unwrap_or_else(|| self.days_in_month())
    }

    pub fn notes(&self) -> &BTreeMap<u32, Vec<String>> {
        &self.notes
    }

    pub fn check_day(&self, day: u32) -> DaybookResult<()> {
        let max = self.effective_day_count();
        if day < 1 || day > max {
            return Err(DaybookError::InvalidDay { day, max });
        }
        Ok(())
    }

    /// Append a note to a day, keeping earlier notes.
    pub fn add_note(&mut self, day: u32, text: impl Into<String>) -> DaybookResult<()> {
        self.check_day(day)?;
        self.notes.entry(day).or_default().push(text.into());
        Ok(())
    }

    /// Overwrite all notes of a day with a single note.
    pub fn replace_note(&mut self, day: u32, text: impl Into<String>) -> DaybookResult<()> {
        self.check_day(day)?;
        self.notes.insert(day, vec![text.into()]);
        Ok(())
    }

    pub fn get_notes(&self, day: u32) -> NoteResult {
        match self.notes.get(&day) {
            None => NoteResult::NoneStored,
            Some(notes) if notes.len() == 1 && notes[0].is_empty() => NoteResult::EmptyMarker,
            Some(notes) => NoteResult::Found(notes.clone()),
        }
    }

    /// True when the day has at least one non-blank note.
    pub fn has_content(&self, day: u32) -> bool {
        self.notes
            .get(&day)
            .is_some_and(|notes| notes.iter().any(|note| !note.trim().is_empty()))
    }

    /// Lay the month out Sunday through Saturday, marking days with notes.
    pub fn render_grid(&self) -> DaybookResult<MonthGrid> {
        let first_column = sunday_first_column(weekday_of_first(self.year, self.month)?);

        Ok(MonthGrid::layout(
            first_column,
            self.effective_day_count(),
            |day| self.has_content(day),
        ))
    }

    /// Append stored notes to a day. Keys like "1" and "01" name the same
    /// day, so a day can be filled more than once while loading.
    fn extend_notes(&mut self, day: u32, notes: Vec<String>) -> DaybookResult<()> {
        self.check_day(day)?;
        self.notes.entry(day).or_default().extend(notes);
        Ok(())
    }
}

impl fmt::Display for CalendarRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.month.name(), self.year)
    }
}
