//! Application main loop
//!
//! ```text
//! loop {
//!     terminal.draw(|f| view::render(&app, f))     draw
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event(100ms) {     wait for input
//!         let msg = handle_event(event, &app);     event -> message
//!         update::update(&mut app, msg)            message -> new state
//!     }
//!     save the config if a toggle changed it
//! }
//! ```

use std::time::Duration;

use anyhow::Result;

use crate::config::ConfigService;
use crate::event;
use crate::i18n::t;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the main loop until the user quits
pub fn run(terminal: &mut Term, app: &mut App, config: &dyn ConfigService) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        save_config_change(app, config);
    }

    tracing::info!(
        customers = app.session.records().len(),
        "Customer form closed"
    );
    Ok(())
}

/// Persist theme or language changes; a failed save only shows in the status bar
fn save_config_change(app: &mut App, config: &dyn ConfigService) {
    let Some(changed) = app.take_config_change() else {
        return;
    };

    if let Err(e) = config.save(&changed) {
        tracing::warn!("Failed to save config: {e:#}");
        app.set_status(format!("{}{e}", t().status.config_save_failed));
    }
}
