//! Filtering, ordering and limiting of expenses for the `list` command.

use crate::model::{Expense, ExpenseDate};
use crate::Result;
use anyhow::bail;
use std::cmp::Ordering;
use std::num::NonZeroUsize;

/// A validated set of `list` filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    category: Option<String>,
    since: Option<ExpenseDate>,
    until: Option<ExpenseDate>,
    limit: Option<NonZeroUsize>,
}

impl ListQuery {
    /// Validates the date bounds. Empty strings mean "no filter".
    pub fn new(
        category: Option<&str>,
        since: Option<&str>,
        until: Option<&str>,
        limit: Option<NonZeroUsize>,
    ) -> Result<Self> {
        Ok(Self {
            category: category.filter(|c| !c.is_empty()).map(str::to_lowercase),
            since: bound(since, "since")?,
            until: bound(until, "until")?,
            limit,
        })
    }

    /// Applies the query:
    /// - keeps expenses whose category equals the filter, ignoring case
    /// - keeps expenses with `since <= date <= until`
    /// - sorts into canonical order (date, then creation time)
    /// - keeps only the last `limit` expenses, i.e. the most recent ones
    pub fn apply(&self, mut expenses: Vec<Expense>) -> Vec<Expense> {
        expenses.retain(|e| self.matches(e));
        expenses.sort_by(canonical_order);
        if let Some(limit) = self.limit {
            let excess = expenses.len().saturating_sub(limit.get());
            expenses = expenses.split_off(excess);
        }
        expenses
    }

    fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = &self.category {
            if expense.category().to_lowercase() != *category {
                return false;
            }
        }
        if let Some(since) = &self.since {
            if expense.date() < since.as_str() {
                return false;
            }
        }
        if let Some(until) = &self.until {
            if expense.date() > until.as_str() {
                return false;
            }
        }
        true
    }
}

/// Ascending by date, then by creation timestamp. `sort_by` is stable, so expenses that tie on
/// both keep their stored order.
pub fn canonical_order(a: &Expense, b: &Expense) -> Ordering {
    a.date()
        .cmp(b.date())
        .then_with(|| a.created_at().cmp(b.created_at()))
}

fn bound(value: Option<&str>, name: &str) -> Result<Option<ExpenseDate>> {
    match value.filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => match v.parse() {
            Ok(date) => Ok(Some(date)),
            Err(_) => bail!("{name} must be YYYY-MM-DD"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::expense;

    fn dates(expenses: &[Expense]) -> Vec<&str> {
        expenses.iter().map(Expense::date).collect()
    }

    fn limit(n: usize) -> Option<NonZeroUsize> {
        NonZeroUsize::new(n)
    }

    #[test]
    fn category_filter_ignores_case() {
        let expenses = vec![
            expense("2025-08-01", "Food", 1.0, "a"),
            expense("2025-08-02", "food", 2.0, "b"),
            expense("2025-08-03", "Transport", 3.0, "c"),
            expense("2025-08-04", "Fast Food", 4.0, "d"),
        ];
        let q = ListQuery::new(Some("FOOD"), None, None, None).unwrap();
        let got = q.apply(expenses);
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].category(), "food");
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let expenses = vec![
            expense("2025-08-01", "Food", 1.0, "a"),
            expense("2025-08-15", "Food", 1.0, "b"),
            expense("2025-09-01", "Food", 1.0, "c"),
        ];
        let q = ListQuery::new(None, Some("2025-08-10"), Some("2025-08-31"), None).unwrap();
        assert_eq!(dates(&q.apply(expenses.clone())), vec!["2025-08-15"]);

        let q = ListQuery::new(None, Some("2025-08-01"), Some("2025-08-15"), None).unwrap();
        assert_eq!(dates(&q.apply(expenses)), vec!["2025-08-01", "2025-08-15"]);
    }

    #[test]
    fn limit_keeps_most_recent_in_ascending_order() {
        let expenses = vec![
            expense("2025-08-03", "Food", 1.0, "a"),
            expense("2025-08-01", "Food", 1.0, "b"),
            expense("2025-08-02", "Food", 1.0, "c"),
        ];
        let q = ListQuery::new(None, None, None, limit(2)).unwrap();
        assert_eq!(dates(&q.apply(expenses)), vec!["2025-08-02", "2025-08-03"]);
    }

    #[test]
    fn limit_larger_than_result_keeps_everything() {
        let expenses = vec![expense("2025-08-03", "Food", 1.0, "a")];
        let q = ListQuery::new(None, None, None, limit(10)).unwrap();
        assert_eq!(q.apply(expenses).len(), 1);
    }

    #[test]
    fn same_date_sorted_by_created_at_then_stored_order() {
        let mut first = expense("2025-08-01", "Food", 1.0, "2025-08-01T09:00:00.000Z");
        first.id = "first".to_string();
        let mut second = expense("2025-08-01", "Food", 2.0, "2025-08-01T09:00:00.000Z");
        second.id = "second".to_string();
        let expenses = vec![
            expense("2025-08-01", "Food", 3.0, "2025-08-01T10:00:00.000Z"),
            first,
            second,
        ];
        let got = ListQuery::default().apply(expenses);
        let ids: Vec<&str> = got.iter().map(Expense::id).collect();
        assert_eq!(&ids[..2], &["first", "second"]);
        assert_eq!(got[2].amount(), 3.0);
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        let err = ListQuery::new(None, Some("Aug 1"), None, None).unwrap_err();
        assert_eq!(err.to_string(), "since must be YYYY-MM-DD");
        let err = ListQuery::new(None, None, Some("2025-13-99"), None).unwrap_err();
        assert_eq!(err.to_string(), "until must be YYYY-MM-DD");
    }

    #[test]
    fn empty_filters_are_ignored() {
        let q = ListQuery::new(Some(""), Some(""), Some(""), None).unwrap();
        assert_eq!(q, ListQuery::default());
    }
}
