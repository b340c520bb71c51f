//! Core library for daybook.
//!
//! This crate holds everything below the terminal UI:
//! - `period` validates months and years and answers calendar arithmetic
//! - `calendar` models one named month of day notes and its on-disk shape
//! - `store` persists calendars as JSON lines
//! - `service` runs the create/read/edit/delete workflows

pub mod calendar;
pub mod config;
pub mod error;
pub mod period;
pub mod service;
pub mod store;

pub use calendar::{CalendarRecord, NoteResult};
pub use error::{DaybookError, DaybookResult};
