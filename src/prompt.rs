//! Interactive completion of the `add` command.
//!
//! `resolve_missing_fields` asks only for the fields a draft does not have yet. The questions go
//! through the `Prompt` trait so the terminal can be swapped out for a script in tests.

use crate::model::{parse_amount, ExpenseDate, ExpenseDraft, DEFAULT_CURRENCY};
use crate::Result;
use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

/// Categories offered at the category prompt. Any other text is accepted as well.
pub const CATEGORIES: [&str; 10] = [
    "Food",
    "Transport",
    "Groceries",
    "Utilities",
    "Rent",
    "Entertainment",
    "Health",
    "Shopping",
    "Travel",
    "Other",
];

const DEFAULT_CATEGORY: &str = "Other";

/// Something that can ask the user a question.
pub trait Prompt {
    /// Asks `message` and returns the trimmed answer. An empty answer becomes `default` when there
    /// is one. Returns `None` once the input has ended or the user has interrupted it.
    fn ask(&mut self, message: &str, default: Option<&str>) -> Result<Option<String>>;
}

/// Prompts on the terminal using `rustyline`. The editor is only created on the first question.
#[derive(Default)]
pub struct LinePrompt {
    editor: Option<DefaultEditor>,
}

impl LinePrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompt for LinePrompt {
    fn ask(&mut self, message: &str, default: Option<&str>) -> Result<Option<String>> {
        let editor = match self.editor.take() {
            Some(editor) => editor,
            None => DefaultEditor::new().context("Unable to open the terminal for input")?,
        };
        let editor = self.editor.insert(editor);
        let prompt = match default {
            Some(default) => format!("{message} ({default}): "),
            None => format!("{message}: "),
        };
        match editor.readline(&prompt) {
            Ok(line) => Ok(Some(answer(&line, default))),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e).context("Unable to read from the terminal"),
        }
    }
}

pub(crate) fn answer(line: &str, default: Option<&str>) -> String {
    let line = line.trim();
    match default {
        Some(default) if line.is_empty() => default.to_string(),
        _ => line.to_string(),
    }
}

/// Fills in every absent field of `draft` by asking `prompt`, in the order amount, category,
/// date, note, currency. Fields that are already set are never asked. Amount and date are asked
/// again until the answer is valid. When the input ends, the remaining fields stay absent and
/// validation of the draft decides what happens.
pub fn resolve_missing_fields(
    mut draft: ExpenseDraft,
    prompt: &mut impl Prompt,
    today: &ExpenseDate,
) -> Result<ExpenseDraft> {
    if draft.amount.is_none() {
        draft.amount = ask_until(prompt, "Amount", "Amount (enter a number)", None, |s| {
            parse_amount(s)
        })?;
    }

    if draft.category.is_none() {
        let message = format!("Category [{}]", CATEGORIES.join("/"));
        draft.category = prompt
            .ask(&message, Some(DEFAULT_CATEGORY))?
            .filter(|c| !c.is_empty())
            .map(|c| canonical_category(&c));
    }

    if draft.date.is_none() {
        draft.date = ask_until(
            prompt,
            "Date (YYYY-MM-DD)",
            "Date (use YYYY-MM-DD)",
            Some(today.as_str()),
            |s| ExpenseDate::is_valid(s).then(|| s.to_string()),
        )?;
    }

    if draft.note.is_none() {
        draft.note = prompt
            .ask("Note (optional)", None)?
            .filter(|n| !n.is_empty());
    }

    if draft.currency.is_none() {
        draft.currency = prompt
            .ask("Currency (ISO)", Some(DEFAULT_CURRENCY))?
            .filter(|c| !c.is_empty());
    }

    debug!("Resolved draft: {draft:?}");
    Ok(draft)
}

fn ask_until<T>(
    prompt: &mut impl Prompt,
    message: &str,
    retry_message: &str,
    default: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>> {
    let mut message = message;
    loop {
        let Some(answer) = prompt.ask(message, default)? else {
            return Ok(None);
        };
        if let Some(value) = parse(&answer) {
            return Ok(Some(value));
        }
        message = retry_message;
    }
}

/// Maps `food` to `Food` when it names one of the offered categories; other text is kept as is.
fn canonical_category(answer: &str) -> String {
    CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(answer))
        .map(|c| c.to_string())
        .unwrap_or_else(|| answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::ScriptedPrompt;

    fn today() -> ExpenseDate {
        "2025-08-07".parse().unwrap()
    }

    #[test]
    fn asks_only_for_missing_fields() {
        let draft = ExpenseDraft::from_raw(Some("4"), Some("Rent"), None, Some("x"), Some("USD"));
        let mut prompt = ScriptedPrompt::new(["2025-08-02"]);
        let got = resolve_missing_fields(draft, &mut prompt, &today()).unwrap();
        assert_eq!(got.date.as_deref(), Some("2025-08-02"));
        assert_eq!(prompt.asked(), &["Date (YYYY-MM-DD)"]);
    }

    #[test]
    fn defaults_apply_on_empty_answers() {
        let mut prompt = ScriptedPrompt::new(["12.5", "", "", "", ""]);
        let got = resolve_missing_fields(ExpenseDraft::default(), &mut prompt, &today()).unwrap();
        assert_eq!(got.amount, Some(12.5));
        assert_eq!(got.category.as_deref(), Some("Other"));
        assert_eq!(got.date.as_deref(), Some("2025-08-07"));
        assert_eq!(got.note, None);
        assert_eq!(got.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn reasks_invalid_amount_and_date() {
        let mut prompt = ScriptedPrompt::new(["ten", "10", "groceries", "Aug 1", "2025-08-01"]);
        let mut draft = ExpenseDraft::default();
        draft.note = Some("n".to_string());
        draft.currency = Some("EUR".to_string());
        let got = resolve_missing_fields(draft, &mut prompt, &today()).unwrap();
        assert_eq!(got.amount, Some(10.0));
        assert_eq!(got.category.as_deref(), Some("Groceries"));
        assert_eq!(got.date.as_deref(), Some("2025-08-01"));
        assert_eq!(
            prompt.asked()[1],
            "Amount (enter a number)",
            "second question should be the retry"
        );
        assert_eq!(prompt.asked()[4], "Date (use YYYY-MM-DD)");
    }

    #[test]
    fn free_text_category_is_kept() {
        let draft = ExpenseDraft::from_raw(Some("1"), None, Some("2025-08-01"), Some("n"), None);
        let mut prompt = ScriptedPrompt::new(["Pets", "CHF"]);
        let got = resolve_missing_fields(draft, &mut prompt, &today()).unwrap();
        assert_eq!(got.category.as_deref(), Some("Pets"));
        assert_eq!(got.currency.as_deref(), Some("CHF"));
    }

    #[test]
    fn end_of_input_leaves_fields_absent() {
        let mut prompt = ScriptedPrompt::new(Vec::<&str>::new());
        let got = resolve_missing_fields(ExpenseDraft::default(), &mut prompt, &today()).unwrap();
        assert_eq!(got, ExpenseDraft::default());
    }

    #[test]
    fn answers_are_trimmed_and_defaulted() {
        assert_eq!(answer("  Food \n", None), "Food");
        assert_eq!(answer("   ", Some("EUR")), "EUR");
        assert_eq!(answer("", None), "");
    }
}
