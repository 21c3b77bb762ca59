//! Customer Form TUI
//!
//! ## Architecture
//!
//! The Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: what happened (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: key input to messages (`event/`)
//!
//! Customer records, the draft and the edit marker live in
//! `customer_form_core::FormSession`; this crate only drives it from the
//! keyboard and draws it.
//!
//! Startup:
//!
//! ```text
//! init_logging()          log file under the config dir, filter from CUSTOMER_FORM_LOG
//! config.load()           theme + language, defaults if missing or unreadable
//! CUSTOMER_FORM_LANG      overrides the configured language
//! init_terminal()
//! app::run()              main loop
//! restore_terminal()      always, before the result is returned
//! ```

mod app;
mod config;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::env;

use anyhow::Result;

use config::{ConfigService, JsonConfigService, LANGUAGE_ENV};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Logging is best-effort; the UI works without it
    match init_logging(&config::config_dir()) {
        Ok(path) => tracing::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {e:#}"),
    }

    // 2. Configuration
    let config_service = JsonConfigService::new();
    tracing::debug!("Config file: {}", config_service.path().display());
    let app_config = config_service
        .load()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {e:#}");
            config::AppConfig::default()
        })
        .with_language_override(env::var(LANGUAGE_ENV).ok().as_deref());

    view::theme::set_theme(app_config.theme);
    i18n::set_language(app_config.language);
    tracing::info!(
        theme = ?app_config.theme,
        language = app_config.language.code(),
        "Starting customer form"
    );

    // 3. Terminal
    let mut terminal = init_terminal()?;

    // 4. Main loop
    let mut app = model::App::new(app_config);
    let result = app::run(&mut terminal, &mut app, &config_service);

    // 5. Restore the terminal whether or not the loop failed
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Main loop failed: {e:#}");
    }
    result
}
