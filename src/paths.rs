//! Where logs go when no path is given.

use std::env;
use std::path::PathBuf;

/// The directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "MetaLog";

/// Returns the per-application log directory.
///
/// This is `MetaLog` inside the platform data directory (for example
/// `%APPDATA%\MetaLog` or `~/.local/share/MetaLog`), or inside the system
/// temporary directory if the platform has no data directory. The directory
/// itself is created lazily by the first write.
pub fn default_log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(env::temp_dir)
        .join(APP_DIR_NAME)
}

/// Returns the default log file, named after this crate.
pub fn default_log_file() -> PathBuf {
    default_log_dir().join(concat!(env!("CARGO_PKG_NAME"), ".log"))
}
