//! List command handler.

use crate::args::ListArgs;
use crate::commands::Out;
use crate::model::Expense;
use crate::query::ListQuery;
use crate::{render, Config, Result};
use anyhow::Context;
use tracing::debug;

/// Lists the stored expenses that match `args`, in canonical order (date, then creation time).
///
/// The message is either the pretty-printed JSON array (`--json`) or a table with a total line.
/// The structure always holds the matching expenses.
///
/// # Errors
///
/// - Returns an error if `--since` or `--until` is not `YYYY-MM-DD`.
/// - Returns an error if the data file exists but cannot be read.
pub async fn list(config: Config, args: ListArgs) -> Result<Out<Vec<Expense>>> {
    let query = ListQuery::new(args.category(), args.since(), args.until(), args.limit())?;
    let expenses = query.apply(config.store().load().await?);
    debug!("{} expenses matched {query:?}", expenses.len());

    let message = if args.json() {
        serde_json::to_string_pretty(&expenses).context("Unable to serialize expenses")?
    } else {
        render::table(&expenses)
    };
    Ok(Out::new(message, expenses))
}
