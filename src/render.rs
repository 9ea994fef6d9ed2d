//! Plain-text rendering of `list` results.

use crate::model::{money, Expense};

/// Printed instead of a table when nothing matches.
pub const NO_RESULTS: &str = "No expenses found.";

const AMOUNT_WIDTH: usize = 8;
const CATEGORY_WIDTH: usize = 14;

/// Renders one row per expense followed by a blank line and the total, e.g.
///
/// ```text
/// 2025-08-01  EUR    12.50  Food           Lunch
/// 2025-08-02  EUR     3.20  Transport
///
/// Total: 15.70 (mixed currencies may be summed as-is)
/// ```
///
/// The total adds every amount regardless of currency.
pub fn table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return NO_RESULTS.to_string();
    }
    let mut lines: Vec<String> = expenses.iter().map(row).collect();
    lines.push(String::new());
    lines.push(format!(
        "Total: {} (mixed currencies may be summed as-is)",
        money::format_total(expenses.iter().map(Expense::amount))
    ));
    lines.join("\n")
}

fn row(e: &Expense) -> String {
    let line = format!(
        "{}  {} {:>aw$}  {:<cw$} {}",
        e.date(),
        e.currency(),
        money::format_amount(e.amount()),
        e.category(),
        e.note().unwrap_or_default(),
        aw = AMOUNT_WIDTH,
        cw = CATEGORY_WIDTH,
    );
    line.trim_end().to_string()
}
