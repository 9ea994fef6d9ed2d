pub mod args;
pub mod commands;
mod config;
mod error;
pub mod model;
pub mod prompt;
pub mod query;
pub mod render;
mod store;
mod utils;

pub use config::{default_data_dir, Config, DATA_DIR};
pub use error::Error;
pub use error::Result;
pub use store::Store;
