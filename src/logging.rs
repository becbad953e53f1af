//! Diagnostic log setup
//!
//! The terminal belongs to the UI, so tracing output goes to a file.
//! Filtering follows `RUST_LOG` and defaults to `info`.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Default log destination: `$TMPDIR/forecast.log`
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("forecast.log")
}

fn open_log(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
///
/// Returns an error if the file cannot be opened. A subscriber that is
/// already installed is left in place.
pub fn init(path: &Path) -> io::Result<()> {
    let file = open_log(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(())
}
