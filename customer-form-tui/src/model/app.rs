//! Main application state

use customer_form_core::FormSession;

use super::{FocusPanel, FormState, ModalState, RecordsState};
use crate::config::AppConfig;

/// Main application state
pub struct App {
    /// Whether the main loop should exit
    pub should_quit: bool,

    /// Panel receiving key input
    pub focus: FocusPanel,

    /// Draft, stored customers, edit marker and inline error
    pub session: FormSession,

    /// Form panel state
    pub form: FormState,
    /// Customer table state
    pub records: RecordsState,

    /// Status bar message
    pub status_message: Option<String>,

    /// Modal state
    pub modal: ModalState,

    /// Presentation settings
    pub config: AppConfig,
    /// Set when `config` changed and should be saved
    pub config_dirty: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Form,
            session: FormSession::new(),
            form: FormState::new(),
            records: RecordsState::new(),
            status_message: None,
            modal: ModalState::new(),
            config,
            config_dirty: false,
        }
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Take the changed configuration, if any, for saving
    pub fn take_config_change(&mut self) -> Option<AppConfig> {
        std::mem::take(&mut self.config_dirty).then_some(self.config)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
