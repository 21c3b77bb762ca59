//! File logging

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter, e.g. `debug` or `customer_form_core=trace`
const LOG_ENV: &str = "CUSTOMER_FORM_LOG";

const LOG_FILE: &str = "customer-form.log";

/// Install a global subscriber appending to `<dir>/customer-form.log`
///
/// Records emitted through the `log` crate (the core library) are forwarded
/// to the same subscriber. Returns the log file path.
pub fn init_logging(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("a global logger is already installed")?;

    Ok(path)
}
