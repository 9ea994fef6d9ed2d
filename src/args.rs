//! These structs provide the CLI interface for the ledgerline CLI.

use crate::config::default_data_dir;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

const AFTER_HELP: &str = "\
Examples:
  ledgerline add
  ledgerline add --amount 12.5 --category Food --date 2025-08-07 --note \"Lunch\"
  ledgerline list --category Food --since 2025-08-01 --until 2025-08-31
  ledgerline list --limit 10 --json";

/// ledgerline: Track expenses in a local JSON store.
///
/// Expenses are appended to a single JSON file in your data directory (by default
/// ~/.ledgerline/expenses.json) and can be listed with filters and a running total.
#[derive(Debug, Parser, Clone)]
#[command(name = "ledgerline", version, after_help = AFTER_HELP)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a new expense.
    ///
    /// Any of amount, category or date that is not given on the command line is asked for
    /// interactively. Use --interactive to be asked for everything that is missing, including the
    /// note and the currency.
    Add(AddArgs),
    /// List expenses, oldest first, with a total.
    List(ListArgs),
    /// Show the data file path.
    Path,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// The directory where expenses are stored. Defaults to ~/.ledgerline
    #[arg(long, global = true, env = "LEDGERLINE_HOME", default_value_t = DisplayPath(default_data_dir()))]
    data_dir: DisplayPath,
}

impl Common {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn data_dir(&self) -> &DisplayPath {
        &self.data_dir
    }
}

/// (Not shown): Args for the `ledgerline add` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct AddArgs {
    /// Amount, e.g. 12.5
    #[arg(short, long, allow_negative_numbers = true)]
    amount: Option<String>,

    /// Category, e.g. Food
    #[arg(short, long)]
    category: Option<String>,

    /// Date in YYYY-MM-DD. Defaults to today (UTC).
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    date: Option<String>,

    /// Note
    #[arg(short, long)]
    note: Option<String>,

    /// Currency (ISO code). Defaults to EUR.
    #[arg(long)]
    currency: Option<String>,

    /// Prompt for values
    #[arg(short, long)]
    interactive: bool,
}

impl AddArgs {
    pub fn new(
        amount: Option<&str>,
        category: Option<&str>,
        date: Option<&str>,
        note: Option<&str>,
        currency: Option<&str>,
        interactive: bool,
    ) -> Self {
        Self {
            amount: amount.map(str::to_string),
            category: category.map(str::to_string),
            date: date.map(str::to_string),
            note: note.map(str::to_string),
            currency: currency.map(str::to_string),
            interactive,
        }
    }

    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }
}

/// (Not shown): Args for the `ledgerline list` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct ListArgs {
    /// Filter by category (case-insensitive exact match)
    #[arg(short, long)]
    category: Option<String>,

    /// Start date inclusive
    #[arg(long, value_name = "YYYY-MM-DD")]
    since: Option<String>,

    /// End date inclusive
    #[arg(long, value_name = "YYYY-MM-DD")]
    until: Option<String>,

    /// Show only the N most recent matching expenses. N must be a positive integer; 0 is
    /// rejected.
    #[arg(short, long, value_name = "N")]
    limit: Option<NonZeroUsize>,

    /// Output raw JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    pub fn new(
        category: Option<&str>,
        since: Option<&str>,
        until: Option<&str>,
        limit: Option<NonZeroUsize>,
        json: bool,
    ) -> Self {
        Self {
            category: category.map(str::to_string),
            since: since.map(str::to_string),
            until: until.map(str::to_string),
            limit,
            json,
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn since(&self) -> Option<&str> {
        self.since.as_deref()
    }

    pub fn until(&self) -> Option<&str> {
        self.until.as_deref()
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    pub fn json(&self) -> bool {
        self.json
    }
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ledgerline").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn add_flags() {
        let args = parse(&[
            "--data-dir", "/tmp/x", "add", "-a", "-12.5", "-c", "Food", "-d", "2025-08-07", "-n",
            "Lunch", "--currency", "USD", "-i",
        ]);
        assert_eq!(args.common().data_dir().path(), Path::new("/tmp/x"));
        let Command::Add(add) = args.command() else {
            panic!("expected add")
        };
        assert_eq!(add.amount(), Some("-12.5"));
        assert_eq!(add.category(), Some("Food"));
        assert_eq!(add.date(), Some("2025-08-07"));
        assert_eq!(add.note(), Some("Lunch"));
        assert_eq!(add.currency(), Some("USD"));
        assert!(add.interactive());
    }

    #[test]
    fn list_flags() {
        let args = parse(&[
            "list", "-c", "food", "--since", "2025-08-01", "--until", "2025-08-31", "-l", "3",
            "--json",
        ]);
        let Command::List(list) = args.command() else {
            panic!("expected list")
        };
        assert_eq!(list.category(), Some("food"));
        assert_eq!(list.since(), Some("2025-08-01"));
        assert_eq!(list.until(), Some("2025-08-31"));
        assert_eq!(list.limit(), NonZeroUsize::new(3));
        assert!(list.json());
    }

    #[test]
    fn zero_limit_is_a_usage_error() {
        let res = Args::try_parse_from(["ledgerline", "list", "--limit", "0"]);
        assert!(res.is_err());
    }

    #[test]
    fn global_options_after_subcommand() {
        let args = parse(&["path", "--log-level", "debug"]);
        assert_eq!(args.common().log_level(), LevelFilter::DEBUG);
        assert!(matches!(args.command(), Command::Path));
    }
}
