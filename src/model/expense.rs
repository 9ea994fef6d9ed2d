use crate::model::{money, ExpenseDate};
use crate::Result;
use anyhow::bail;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// The currency used when none is given on the command line or at the prompt.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// One logged expense, exactly as it is persisted in `expenses.json`.
///
/// Example:
/// ```json
/// {
///   "id": "0b3f6f0c6a7d4f0f9a8e2d1c5b4a3f21",
///   "amount": 12.5,
///   "currency": "EUR",
///   "category": "Food",
///   "date": "2025-08-07",
///   "note": "Lunch",
///   "createdAt": "2025-08-07T12:03:44.120Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Generated at creation and never changed.
    pub(crate) id: String,
    pub(crate) amount: f64,
    /// A short code such as `EUR`. Not checked against any list.
    pub(crate) currency: String,
    /// Stored as typed; compared case-insensitively when filtering.
    pub(crate) category: String,
    /// `YYYY-MM-DD`.
    pub(crate) date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) note: Option<String>,
    /// RFC 3339 UTC timestamp of creation, used to break ties between expenses on the same date.
    pub(crate) created_at: String,
}

impl Expense {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// The one-line summary printed after an expense is saved, e.g.
/// `EUR 12.50 (Food on 2025-08-07) - Lunch`.
impl Display for Expense {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({} on {})",
            self.currency,
            money::format_amount(self.amount),
            self.category,
            self.date
        )?;
        if let Some(note) = self.note() {
            write!(f, " - {note}")?;
        }
        Ok(())
    }
}

/// The fields of an expense that is about to be added. Each field is either a concrete value or
/// absent; empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub note: Option<String>,
    pub currency: Option<String>,
}

impl ExpenseDraft {
    /// Builds a draft from raw command line values. An amount that does not parse as a number is
    /// treated as missing.
    pub fn from_raw(
        amount: Option<&str>,
        category: Option<&str>,
        date: Option<&str>,
        note: Option<&str>,
        currency: Option<&str>,
    ) -> Self {
        Self {
            amount: amount.and_then(parse_amount),
            category: non_empty(category),
            date: non_empty(date),
            note: non_empty(note),
            currency: non_empty(currency),
        }
    }

    /// True if any field the user must supply (amount, category, date) is absent.
    pub fn is_incomplete(&self) -> bool {
        self.amount.is_none() || self.category.is_none() || self.date.is_none()
    }

    /// Validates the draft and turns it into a new `Expense` with a fresh id and `now` as its
    /// creation time. The checks run in order: amount, category, date. A missing date becomes the
    /// UTC date of `now`.
    pub fn into_expense(self, now: DateTime<Utc>) -> Result<Expense> {
        let amount = match self.amount {
            Some(amount) if amount.is_finite() => amount,
            _ => bail!("Amount is required. Use --amount or run with --interactive."),
        };
        let Some(category) = self.category.filter(|c| !c.is_empty()) else {
            bail!("Category is required. Use --category or run with --interactive.")
        };
        let date = match self.date.filter(|d| !d.is_empty()) {
            None => ExpenseDate::today(now),
            Some(date) => match date.parse::<ExpenseDate>() {
                Ok(date) => date,
                Err(_) => bail!("Date must be in YYYY-MM-DD"),
            },
        };
        Ok(Expense {
            id: generate_id(),
            amount,
            currency: self
                .currency
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            category,
            date: date.into(),
            note: self.note.filter(|n| !n.is_empty()),
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

/// Parses a finite number, ignoring surrounding whitespace.
pub fn parse_amount(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_string)
}

fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
