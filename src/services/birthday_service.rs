/// Birthday table - who to celebrate on which day
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::utils::datetime::matches_birthday;

/// Errors raised while loading the birthday table
#[derive(Debug)]
pub enum BirthdayError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for BirthdayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BirthdayError::Io(e) => write!(f, "Failed to read birthday file: {}", e),
            BirthdayError::Parse(e) => write!(f, "Invalid birthday file: {}", e),
        }
    }
}

impl std::error::Error for BirthdayError {}

/// On-disk shape of the birthday file: `{"<user id>": "YYYY-MM-DD"}`
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct BirthdayFile {
    birthdays: BTreeMap<String, NaiveDate>,
}

/// User ID to date of birth, read-only once loaded
///
/// Entries are ordered by user ID so lookups are deterministic.
#[derive(Debug, Clone, Default)]
pub struct BirthdayTable {
    entries: BTreeMap<String, NaiveDate>,
}

impl BirthdayTable {
    pub fn new(entries: impl IntoIterator<Item = (String, NaiveDate)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Parse a table from JSON shaped `{"<user id>": "YYYY-MM-DD"}`
    pub fn from_json(json: &str) -> Result<Self, BirthdayError> {
        let file: BirthdayFile = serde_json::from_str(json).map_err(BirthdayError::Parse)?;
        Ok(Self::new(file.birthdays))
    }

    /// Load the table from a file, a missing file gives an empty table
    pub fn load(path: &Path) -> Result<Self, BirthdayError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Birthday file {} not found, no birthday will be announced",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(e) => Err(BirthdayError::Io(e)),
        }
    }

    /// First user whose birthday falls on `today`, year ignored
    pub fn celebrated_on(&self, today: NaiveDate) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, birth_date)| matches_birthday(**birth_date, today))
            .map(|(user_id, _)| user_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_celebrated_on_picks_matching_user() {
        let today = date(2026, 10, 18);
        let table = BirthdayTable::new([
            ("042".to_string(), date(1990, 1, 2)),
            ("123".to_string(), today),
            ("999".to_string(), date(1985, 10, 19)),
        ]);

        assert_eq!(table.celebrated_on(today), Some("123"));
    }

    #[test]
    fn test_celebrated_on_ignores_year() {
        let table = BirthdayTable::new([("123".to_string(), date(1995, 10, 18))]);
        assert_eq!(table.celebrated_on(date(2026, 10, 18)), Some("123"));
    }

    #[test]
    fn test_celebrated_on_none_when_nobody_matches() {
        let table = BirthdayTable::new([
            ("1".to_string(), date(1990, 1, 2)),
            ("2".to_string(), date(1991, 5, 6)),
        ]);
        assert_eq!(table.celebrated_on(date(2026, 10, 18)), None);
        assert_eq!(BirthdayTable::default().celebrated_on(date(2026, 10, 18)), None);
    }

    #[test]
    fn test_celebrated_on_is_deterministic_for_shared_dates() {
        let table = BirthdayTable::new([
            ("200".to_string(), date(1990, 7, 14)),
            ("100".to_string(), date(2001, 7, 14)),
        ]);
        assert_eq!(table.celebrated_on(date(2026, 7, 14)), Some("100"));
    }

    #[test]
    fn test_from_json() {
        let table =
            BirthdayTable::from_json(r#"{"123": "1995-03-15", "456": "2000-02-29"}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.celebrated_on(date(2026, 3, 15)), Some("123"));
    }

    #[test]
    fn test_from_json_rejects_bad_dates() {
        assert!(BirthdayTable::from_json(r#"{"123": "15/03/1995"}"#).is_err());
        assert!(BirthdayTable::from_json("not json").is_err());
        assert!(BirthdayTable::from_json(r#"["123", "1995-03-15"]"#).is_err());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let table = BirthdayTable::load(Path::new("/nonexistent/birthdays.json")).unwrap();
        assert!(table.is_empty());
    }
}
