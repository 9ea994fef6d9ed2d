use crate::commands::Out;
use crate::Config;
use std::path::PathBuf;

/// Reports where the expenses file lives. Does not check that it exists.
pub fn path(config: &Config) -> Out<PathBuf> {
    let location = config.store().location().to_path_buf();
    Out::new(location.display().to_string(), location)
}
