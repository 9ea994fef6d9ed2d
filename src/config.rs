//! Resolution of the data directory.
//!
//! Everything ledgerline stores lives in one directory, `$HOME/.ledgerline` unless
//! `--data-dir` or `LEDGERLINE_HOME` says otherwise. Building a `Config` never touches the
//! filesystem; the directory is created the first time an expense is saved.

use crate::store::Store;
use std::path::{Path, PathBuf};
use tracing::error;

/// Name of the data directory inside the user's home directory.
pub const DATA_DIR: &str = ".ledgerline";

#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    store: Store,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let store = Store::new(&root);
        Self { root, store }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

/// `$HOME/.ledgerline`, or `.ledgerline` relative to the working directory when the home
/// directory cannot be determined.
pub fn default_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(DATA_DIR),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --data-dir or LEDGERLINE_HOME instead of relying on the default \
                data directory.",
            );
            PathBuf::from(DATA_DIR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_lives_in_root() {
        let config = Config::new("/tmp/ll");
        assert_eq!(config.root(), Path::new("/tmp/ll"));
        assert_eq!(
            config.store().location(),
            Path::new("/tmp/ll/expenses.json")
        );
    }

    #[test]
    fn new_does_not_create_anything() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("not-yet");
        let _ = Config::new(&root);
        assert!(!root.exists());
    }

    #[test]
    fn default_is_under_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(default_data_dir(), home.join(".ledgerline"));
        }
    }
}
