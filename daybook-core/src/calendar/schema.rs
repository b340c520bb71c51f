//! Mapping between calendar records and the JSON objects stored on disk.
//!
//! Stored objects come in two field-name flavors: the legacy one
//! (`_month`, `_year`, `_daysmonth`, `calendar_data`, plus a `days` counter)
//! and the plain one (`month`, `year`, `daysmonth`, `notesByDay`). Both are
//! read; writes reuse whichever names the stored object already has and keep
//! every field this module does not know about.

use serde_json::{Map, Value};

use super::CalendarRecord;
use crate::error::{DaybookError, DaybookResult};
use crate::period::{validate_month, validate_year};

/// One stored calendar as a JSON object, unknown fields included.
pub type RawRecord = Map<String, Value>;

const NAME_KEY: &str = "name";
const MONTH_KEYS: [&str; 2] = ["_month", "month"];
const YEAR_KEYS: [&str; 2] = ["_year", "year"];
const DAYS_MONTH_KEYS: [&str; 2] = ["_daysmonth", "daysmonth"];
const NOTES_KEYS: [&str; 2] = ["calendar_data", "notesByDay"];
const LEGACY_DAYS_KEY: &str = "days";

fn malformed(message: impl Into<String>) -> DaybookError {
    DaybookError::MalformedRecord(message.into())
}

/// First of `keys` present in `raw`.
fn field<'a>(raw: &'a RawRecord, keys: [&str; 2]) -> Option<&'a Value> {
    keys.iter().find_map(|key| raw.get(*key))
}

/// Key to write: the variant already stored, else the legacy one.
fn key_in_use(raw: &RawRecord, keys: [&'static str; 2]) -> &'static str {
    keys.iter()
        .copied()
        .find(|key| raw.contains_key(*key))
        .unwrap_or(keys[0])
}

/// Day counts are stored as numbers, but older files may hold strings.
fn as_count(value: &Value, field_name: &str) -> DaybookResult<u32> {
    let count = match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    count.ok_or_else(|| malformed(format!("'{}' is not a day count: {}", field_name, value)))
}

/// A day count in the JSON type `existing` already has.
fn count_value(existing: Option<&Value>, count: u32) -> Value {
    match existing {
        Some(Value::String(_)) => Value::String(count.to_string()),
        _ => Value::from(count),
    }
}

/// Name of a stored object, if it has one.
pub(crate) fn record_name(raw: &RawRecord) -> Option<&str> {
    raw.get(NAME_KEY).and_then(Value::as_str)
}

impl CalendarRecord {
    /// Rebuild a record from a stored object, validating every field.
    pub fn from_raw(raw: &RawRecord) -> DaybookResult<Self> {
        let name = record_name(raw).ok_or_else(|| malformed("missing string field 'name'"))?;

        let month = match field(raw, MONTH_KEYS) {
            Some(Value::String(month)) => validate_month(month)?,
            Some(other) => return Err(malformed(format!("month is not a string: {}", other))),
            None => return Err(malformed(format!("calendar '{}' has no month", name))),
        };

        let year = match field(raw, YEAR_KEYS) {
            Some(Value::String(year)) => validate_year(year)?,
            Some(Value::Number(year)) => validate_year(&year.to_string())?,
            Some(other) => return Err(malformed(format!("year is not a string: {}", other))),
            None => return Err(malformed(format!("calendar '{}' has no year", name))),
        };

        let days_override = match field(raw, DAYS_MONTH_KEYS) {
            None | Some(Value::Null) => None,
            Some(value) => Some(as_count(value, DAYS_MONTH_KEYS[0])?),
        };

        let mut record = CalendarRecord::new(name, month, year, days_override)?;

        record.legacy_days = match raw.get(LEGACY_DAYS_KEY) {
            None | Some(Value::Null) => None,
            Some(value) => Some(as_count(value, LEGACY_DAYS_KEY)?).filter(|days| *days != 0),
        };

        match field(raw, NOTES_KEYS) {
            None | Some(Value::Null) => {}
            Some(Value::Object(days)) => {
                for (key, value) in days {
                    let day: u32 = key
                        .trim()
                        .parse()
                        .map_err(|_| malformed(format!("'{}' is not a day number", key)))?;

                    let notes = value
                        .as_array()
                        .ok_or_else(|| malformed(format!("notes for day {} are not a list", day)))?
                        .iter()
                        .map(|note| {
                            note.as_str().map(String::from).ok_or_else(|| {
                                malformed(format!("note for day {} is not a string", day))
                            })
                        })
                        .collect::<DaybookResult<Vec<_>>>()?;

                    record.extend_notes(day, notes)?;
                }
            }
            Some(other) => return Err(malformed(format!("notes are not an object: {}", other))),
        }

        Ok(record)
    }

    /// Serialize into a stored object.
    ///
    /// `base` is the object previously stored under this name. Its unknown
    /// fields, key names and field order are kept.
    pub fn to_raw(&self, base: Option<&RawRecord>) -> RawRecord {
        let mut raw = base.cloned().unwrap_or_default();
        let is_new = base.is_none();

        raw.insert(NAME_KEY.to_string(), Value::String(self.name.clone()));

        let month_key = key_in_use(&raw, MONTH_KEYS);
        raw.insert(
            month_key.to_string(),
            Value::String(self.month.name().to_string()),
        );

        let year_key = key_in_use(&raw, YEAR_KEYS);
        let year = match raw.get(year_key) {
            Some(Value::Number(_)) => Value::from(self.year),
            _ => Value::String(self.year.to_string()),
        };
        raw.insert(year_key.to_string(), year);

        if is_new || raw.contains_key(LEGACY_DAYS_KEY) || self.legacy_days.is_some() {
            let days = count_value(raw.get(LEGACY_DAYS_KEY), self.legacy_days.unwrap_or(0));
            raw.insert(LEGACY_DAYS_KEY.to_string(), days);
        }

        let days_month_key = key_in_use(&raw, DAYS_MONTH_KEYS);
        let days_month = count_value(raw.get(days_month_key), self.days_override.unwrap_or(0));
        raw.insert(days_month_key.to_string(), days_month);

        let notes: Map<String, Value> = self
            .notes
            .iter()
            .map(|(day, notes)| (day.to_string(), Value::from(notes.clone())))
            .collect();
        let notes_key = key_in_use(&raw, NOTES_KEYS);
        raw.insert(notes_key.to_string(), Value::Object(notes));

        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_raw(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn reads_legacy_layout() {
        let raw = as_raw(json!({
            "name": "TestCalendar",
            "_month": "January",
            "_year": "2021",
            "days": 30,
            "_daysmonth": 5,
            "calendar_data": {"1": ["Meeting at 10 AM"], "2": [""]}
        }));

        let record = CalendarRecord::from_raw(&raw).unwrap();
        assert_eq!(record.name(), "TestCalendar");
        assert_eq!(record.month_name(), "January");
        assert_eq!(record.year(), 2021);
        assert_eq!(record.days_override(), Some(5));
        assert_eq!(record.legacy_days, Some(30));
        assert_eq!(record.notes()[&1], vec!["Meeting at 10 AM"]);
        assert_eq!(record.notes()[&2], vec![""]);
    }

    #[test]
    fn reads_plain_layout_with_numeric_year() {
        let raw = as_raw(json!({
            "name": "Plain",
            "month": "feb",
            "year": 2020,
            "daysmonth": 0,
            "notesByDay": {"29": ["leap day"]}
        }));

        let record = CalendarRecord::from_raw(&raw).unwrap();
        assert_eq!(record.month_name(), "February");
        assert_eq!(record.days_override(), None);
        assert_eq!(record.legacy_days, None);
        assert_eq!(record.notes()[&29], vec!["leap day"]);
    }

    #[test]
    fn rejects_structural_problems() {
        let cases = [
            json!({"_month": "January", "_year": "2021"}),
            json!({"name": "x", "_year": "2021"}),
            json!({"name": "x", "_month": "January", "_year": ["2021"]}),
            json!({"name": "x", "_month": "January", "_year": "2021", "calendar_data": []}),
            json!({"name": "x", "_month": "January", "_year": "2021", "calendar_data": {"one": []}}),
            json!({"name": "x", "_month": "January", "_year": "2021", "calendar_data": {"1": [3]}}),
            json!({"name": "x", "_month": "January", "_year": "2021", "_daysmonth": "many"}),
        ];

        for case in cases {
            let raw = as_raw(case.clone());
            assert!(
                matches!(
                    CalendarRecord::from_raw(&raw),
                    Err(DaybookError::MalformedRecord(_))
                ),
                "expected {case} to be malformed"
            );
        }
    }

    #[test]
    fn rejects_semantic_problems() {
        let bad_month = as_raw(json!({"name": "x", "_month": "Smarch", "_year": "2021"}));
        assert!(matches!(
            CalendarRecord::from_raw(&bad_month),
            Err(DaybookError::InvalidMonth(_))
        ));

        let bad_day = as_raw(json!({
            "name": "x", "_month": "February", "_year": "2021",
            "calendar_data": {"30": ["too late"]}
        }));
        assert!(matches!(
            CalendarRecord::from_raw(&bad_day),
            Err(DaybookError::InvalidDay { day: 30, max: 28 })
        ));
    }

    #[test]
    fn new_record_uses_legacy_layout() {
        let mut record = CalendarRecord::create("Journal", "Jan", "2021", None).unwrap();
        record.add_note(2, "b").unwrap();
        record.add_note(10, "j").unwrap();

        let raw = record.to_raw(None);
        let keys: Vec<&str> = raw.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["name", "_month", "_year", "days", "_daysmonth", "calendar_data"]
        );
        assert_eq!(raw["_year"], json!("2021"));
        assert_eq!(raw["_daysmonth"], json!(0));

        let day_keys: Vec<&str> = raw["calendar_data"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(day_keys, vec!["2", "10"]);
    }

    #[test]
    fn roundtrip_through_raw() {
        let mut record = CalendarRecord::create("Journal", "November", "2021", Some(12)).unwrap();
        record.add_note(1, "").unwrap();
        record.add_note(12, "first").unwrap();
        record.add_note(12, "second").unwrap();

        let restored = CalendarRecord::from_raw(&record.to_raw(None)).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn rewrite_keeps_variant_keys_and_unknown_fields() {
        let base = as_raw(json!({
            "name": "Plain",
            "month": "March",
            "year": 2024,
            "daysmonth": 0,
            "notesByDay": {"1": ["old"]},
            "color": "teal"
        }));

        let mut record = CalendarRecord::from_raw(&base).unwrap();
        record.replace_note(1, "new").unwrap();
        let raw = record.to_raw(Some(&base));

        assert_eq!(raw["color"], json!("teal"));
        assert_eq!(raw["year"], json!(2024));
        assert_eq!(raw["notesByDay"], json!({"1": ["new"]}));
        assert!(!raw.contains_key("_month"));
        assert!(!raw.contains_key("calendar_data"));
        assert!(!raw.contains_key("days"));
    }

    #[test]
    fn day_keys_naming_the_same_day_are_merged_in_file_order() {
        let raw = as_raw(json!({
            "name": "Padded",
            "_month": "January",
            "_year": "2021",
            "calendar_data": {"1": ["keep me"], "01": ["other"], " 1": ["third"]}
        }));

        let record = CalendarRecord::from_raw(&raw).unwrap();
        assert_eq!(record.notes()[&1], vec!["keep me", "other", "third"]);

        let rewritten = record.to_raw(Some(&raw));
        assert_eq!(
            rewritten["calendar_data"],
            json!({"1": ["keep me", "other", "third"]})
        );
    }

    #[test]
    fn rewrite_keeps_string_day_counts_as_strings() {
        let base = as_raw(json!({
            "name": "Old",
            "_month": "January",
            "_year": "2021",
            "days": "30",
            "_daysmonth": "5",
            "calendar_data": {}
        }));

        let record = CalendarRecord::from_raw(&base).unwrap();
        assert_eq!(record.days_override(), Some(5));

        let raw = record.to_raw(Some(&base));
        assert_eq!(raw["days"], json!("30"));
        assert_eq!(raw["_daysmonth"], json!("5"));

        let fresh = record.to_raw(None);
        assert_eq!(fresh["days"], json!(30));
        assert_eq!(fresh["_daysmonth"], json!(5));
    }
}
