//! Add command handler.

use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::{Expense, ExpenseDate, ExpenseDraft};
use crate::prompt::{resolve_missing_fields, Prompt};
use crate::{Config, Result};
use chrono::Utc;
use tracing::debug;

/// Validates a new expense and appends it to the store.
///
/// When `--interactive` is set, or any of amount, category or date is missing, the missing fields
/// are asked for through `prompt` first.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A summary of the saved expense and the path of the data file.
/// - The saved `Expense`.
///
/// # Errors
///
/// - Returns an error if the amount is missing or not a finite number.
/// - Returns an error if the category is missing or empty.
/// - Returns an error if the date is not `YYYY-MM-DD`.
/// - Returns an error if the data file cannot be read or written.
///
/// Nothing is written when validation fails.
pub async fn add(config: Config, args: AddArgs, prompt: &mut impl Prompt) -> Result<Out<Expense>> {
    let now = Utc::now();
    let mut draft = ExpenseDraft::from_raw(
        args.amount(),
        args.category(),
        args.date(),
        args.note(),
        args.currency(),
    );

    if args.interactive() || draft.is_incomplete() {
        draft = resolve_missing_fields(draft, prompt, &ExpenseDate::today(now))?;
    }

    let expense = draft.into_expense(now)?;
    debug!("New expense {}", expense.id());

    let store = config.store();
    let mut expenses = store.load().await?;
    expenses.push(expense.clone());
    store.save(&expenses).await?;

    let message = format!(
        "Saved expense: {expense}\nData file: {}",
        store.location().display()
    );
    Ok(Out::new(message, expense))
}
