//! JSON-lines record store.
//!
//! One calendar per line. Every mutation reads the whole file and writes it
//! back through a sibling `.tmp` file that is renamed over the original.
//! Lines this module cannot parse are skipped on read and written back as
//! they were.

use log::{debug, info, warn};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::calendar::schema::record_name;
use crate::calendar::{CalendarRecord, RawRecord};
use crate::error::{DaybookError, DaybookResult};

pub const DEFAULT_STORE_FILE: &str = "data.json";

/// A line of the store file, kept with its original bytes.
enum StoreLine {
    Record {
        name: String,
        bytes: Vec<u8>,
        raw: RawRecord,
    },
    Malformed(Vec<u8>),
}

impl StoreLine {
    fn parse(line_number: usize, bytes: &[u8]) -> StoreLine {
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping line {}: {}", line_number, e);
                return StoreLine::Malformed(bytes.to_vec());
            }
        };

        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(raw)) => match record_name(&raw) {
                Some(name) => StoreLine::Record {
                    name: name.to_string(),
                    bytes: bytes.to_vec(),
                    raw,
                },
                None => {
                    warn!("Skipping line {}: record has no name", line_number);
                    StoreLine::Malformed(bytes.to_vec())
                }
            },
            Ok(_) => {
                warn!("Skipping line {}: not a JSON object", line_number);
                StoreLine::Malformed(bytes.to_vec())
            }
            Err(e) => {
                warn!("Skipping line {}: {}", line_number, e);
                StoreLine::Malformed(bytes.to_vec())
            }
        }
    }

    fn from_raw(raw: RawRecord) -> DaybookResult<StoreLine> {
        let name = record_name(&raw)
            .ok_or_else(|| DaybookError::MalformedRecord("missing string field 'name'".into()))?
            .to_string();
        let bytes =
            serde_json::to_vec(&raw).map_err(|e| DaybookError::Serialization(e.to_string()))?;

        Ok(StoreLine::Record { name, bytes, raw })
    }

    fn has_name(&self, wanted: &str) -> bool {
        matches!(self, StoreLine::Record { name, .. } if name == wanted)
    }

    fn bytes(&self) -> &[u8] {
        match self {
            StoreLine::Record { bytes, .. } => bytes,
            StoreLine::Malformed(bytes) => bytes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored objects in file order. A missing file is an empty store.
    pub fn load_all(&self) -> DaybookResult<Vec<RawRecord>> {
        Ok(self
            .read_lines()?
            .into_iter()
            .filter_map(|line| match line {
                StoreLine::Record { raw, .. } => Some(raw),
                StoreLine::Malformed(_) => None,
            })
            .collect())
    }

    /// Calendar names in file order.
    pub fn names(&self) -> DaybookResult<Vec<String>> {
        Ok(self
            .read_lines()?
            .into_iter()
            .filter_map(|line| match line {
                StoreLine::Record { name, .. } => Some(name),
                StoreLine::Malformed(_) => None,
            })
            .collect())
    }

    pub fn is_name_unique(&self, name: &str) -> DaybookResult<bool> {
        Ok(!self.read_lines()?.iter().any(|line| line.has_name(name)))
    }

    pub fn find_by_name(&self, name: &str) -> DaybookResult<RawRecord> {
        self.read_lines()?
            .into_iter()
            .find_map(|line| match line {
                StoreLine::Record { name: found, raw, .. } if found == name => Some(raw),
                _ => None,
            })
            .ok_or_else(|| DaybookError::NotFound(name.to_string()))
    }

    /// Load and validate a calendar.
    pub fn find_record(&self, name: &str) -> DaybookResult<CalendarRecord> {
        CalendarRecord::from_raw(&self.find_by_name(name)?)
    }

    /// Save a calendar, replacing the stored one with the same name.
    ///
    /// The replacement is merged over the stored object so fields unknown to
    /// [`CalendarRecord`] survive. Other lines are rewritten unchanged.
    pub fn upsert(&self, record: &CalendarRecord) -> DaybookResult<()> {
        self.replace_or_append(record.name(), |base| record.to_raw(base))
    }

    /// Remove every calendar named exactly `name`. Returns how many were removed.
    pub fn delete_by_name(&self, name: &str) -> DaybookResult<usize> {
        let mut lines = self.read_lines()?;
        let before = lines.len();
        lines.retain(|line| !line.has_name(name));
        let removed = before - lines.len();

        if removed > 0 {
            self.write_lines(&lines)?;
            info!("Deleted calendar '{}' from {}", name, self.path.display());
        }

        Ok(removed)
    }

    fn replace_or_append<F>(&self, name: &str, build: F) -> DaybookResult<()>
    where
        F: FnOnce(Option<&RawRecord>) -> RawRecord,
    {
        let mut lines = self.read_lines()?;

        // Only the first record with this name is kept
        let mut seen = false;
        lines.retain(|line| {
            if !line.has_name(name) {
                return true;
            }
            let keep = !seen;
            seen = true;
            keep
        });

        match lines.iter().position(|line| line.has_name(name)) {
            Some(index) => {
                let base = match &lines[index] {
                    StoreLine::Record { raw, .. } => Some(raw),
                    StoreLine::Malformed(_) => None,
                };
                let merged = build(base);
                lines[index] = StoreLine::from_raw(merged)?;
                info!("Updated calendar '{}' in {}", name, self.path.display());
            }
            None => {
                lines.push(StoreLine::from_raw(build(None))?);
                info!("Added calendar '{}' to {}", name, self.path.display());
            }
        }

        self.write_lines(&lines)
    }

    fn read_lines(&self) -> DaybookResult<Vec<StoreLine>> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No store at {}, treating as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let lines: Vec<StoreLine> = content
            .split(|byte| *byte == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .enumerate()
            .filter(|(_, line)| !line.iter().all(u8::is_ascii_whitespace))
            .map(|(index, line)| StoreLine::parse(index + 1, line))
            .collect();

        debug!("Read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }

    fn write_lines(&self, lines: &[StoreLine]) -> DaybookResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut content = Vec::new();
        for line in lines {
            content.extend_from_slice(line.bytes());
            content.push(b'\n');
        }

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        let written =
            std::fs::write(&temp, &content).and_then(|()| std::fs::rename(&temp, &self.path));
        if let Err(e) = written {
            if temp.exists() {
                if let Err(cleanup) = std::fs::remove_file(&temp) {
                    warn!("Could not remove {}: {}", temp.display(), cleanup);
                }
            }
            return Err(e.into());
        }

        debug!("Wrote {} lines to {}", lines.len(), self.path.display());
        Ok(())
    }
}
