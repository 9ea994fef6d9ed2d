//! The on-disk expense collection.
//!
//! All expenses live in a single JSON document, `expenses.json`, inside the data directory. The
//! whole document is read for every command and the whole document is rewritten when an expense
//! is added. Nothing locks the file, so two `ledgerline` processes writing at the same moment race
//! and the last writer wins.

use crate::model::Expense;
use crate::{utils, Result};
use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub(crate) const EXPENSES_JSON: &str = "expenses.json";
const TMP_SUFFIX: &str = "tmp";

/// The shapes accepted when reading `expenses.json`, tried in order. Elements are decoded one by
/// one afterwards so that a single bad element does not discard the others.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    /// The shape that is always written: `[{...}, {...}]`.
    List(Vec<Value>),
    /// Read-only compatibility with `{ "expenses": [{...}, {...}] }`.
    Wrapped { expenses: Vec<Value> },
}

impl Document {
    fn into_elements(self) -> Vec<Value> {
        match self {
            Document::List(elements) => elements,
            Document::Wrapped { expenses } => expenses,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// A store backed by `expenses.json` in `data_dir`. Does not touch the filesystem.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(EXPENSES_JSON),
        }
    }

    /// The path of the expenses document.
    pub fn location(&self) -> &Path {
        &self.path
    }

    /// Reads all expenses. A missing or malformed document yields an empty collection; only
    /// failures to read an existing file are errors.
    pub async fn load(&self) -> Result<Vec<Expense>> {
        let Some(content) = utils::read_if_exists(&self.path).await? else {
            debug!("No expenses file at {}", self.path.display());
            return Ok(Vec::new());
        };
        let expenses = match decode(&content) {
            Some(expenses) => expenses,
            None => {
                warn!(
                    "Ignoring malformed expenses file at {}; treating it as empty",
                    self.path.display()
                );
                Vec::new()
            }
        };
        debug!("Loaded {} expenses from {}", expenses.len(), self.path.display());
        Ok(expenses)
    }

    /// Replaces the document with `expenses`, creating the data directory if needed. The new
    /// content is written next to the document and then renamed over it.
    pub async fn save(&self, expenses: &[Expense]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            utils::make_dir(dir)
                .await
                .context("Unable to create the data directory")?;
        }
        let data = serde_json::to_string_pretty(expenses).context("Unable to serialize expenses")?;
        let tmp = self.path.with_extension(format!("json.{TMP_SUFFIX}"));
        utils::write(&tmp, data).await?;
        utils::rename(&tmp, &self.path).await?;
        debug!("Saved {} expenses to {}", expenses.len(), self.path.display());
        Ok(())
    }
}

/// Returns `None` when the document is not one of the accepted shapes. Elements that are not
/// valid expenses are skipped with a warning.
fn decode(content: &str) -> Option<Vec<Expense>> {
    let document = serde_json::from_str::<Document>(content).ok()?;
    let expenses = document
        .into_elements()
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value::<Expense>(element) {
            Ok(expense) => Some(expense),
            Err(e) => {
                warn!("Skipping expense at index {index}: {e}");
                None
            }
        })
        .collect();
    Some(expenses)
}
