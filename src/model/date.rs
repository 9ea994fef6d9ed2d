use anyhow::bail;
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

const FORMAT: &str = "%Y-%m-%d";

#[allow(clippy::unwrap_used)]
static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// A calendar date written as `YYYY-MM-DD`.
///
/// The string form is what gets stored and compared. Because the format is fixed-width, comparing
/// two `ExpenseDate` strings lexicographically is the same as comparing them chronologically.
/// Parsing requires both the exact pattern and a date that exists on the calendar, so
/// `2025-13-99` is rejected along with `Aug 1`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseDate(String);

impl ExpenseDate {
    /// The UTC calendar date of `now`.
    pub fn today(now: DateTime<Utc>) -> Self {
        Self(now.date_naive().format(FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `s` is a valid `YYYY-MM-DD` date.
    pub fn is_valid(s: &str) -> bool {
        PATTERN.is_match(s) && NaiveDate::parse_from_str(s, FORMAT).is_ok()
    }
}

impl FromStr for ExpenseDate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid(s) {
            bail!("'{s}' is not a date in the form YYYY-MM-DD")
        }
        Ok(Self(s.to_string()))
    }
}

impl From<ExpenseDate> for String {
    fn from(value: ExpenseDate) -> Self {
        value.0
    }
}

impl AsRef<str> for ExpenseDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ExpenseDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
