//! Types that represent the core data model, such as `Expense` and `ExpenseDate`.
mod date;
mod expense;
pub mod money;

pub use date::ExpenseDate;
pub use expense::{parse_amount, Expense, ExpenseDraft, DEFAULT_CURRENCY};
