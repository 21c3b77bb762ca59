//! Key bindings
//!
//! Bindings that need a modifier or a function key. Plain letters and arrows
//! depend on the focused panel and are matched directly in `handler.rs`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key code plus the exact modifier set it must arrive with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBinding {
    const fn with(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Unmodified key
    pub const fn plain(code: KeyCode) -> Self {
        Self::with(code, KeyModifiers::NONE)
    }

    pub const fn alt(ch: char) -> Self {
        Self::with(KeyCode::Char(ch), KeyModifiers::ALT)
    }

    pub const fn ctrl(ch: char) -> Self {
        Self::with(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    pub fn matches(self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.modifiers
    }
}

/// Default key bindings
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::alt('q');
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl('c');
    pub const HELP: KeyBinding = KeyBinding::plain(KeyCode::F(1));
    pub const TOGGLE_THEME: KeyBinding = KeyBinding::plain(KeyCode::F(2));
    pub const TOGGLE_LANGUAGE: KeyBinding = KeyBinding::plain(KeyCode::F(3));
    pub const SWITCH_PANEL: KeyBinding = KeyBinding::plain(KeyCode::Esc);

    // Form panel
    pub const SUBMIT: KeyBinding = KeyBinding::alt('s');
    pub const CLEAR: KeyBinding = KeyBinding::alt('c');

    // Customer table
    pub const EDIT: KeyBinding = KeyBinding::alt('e');
    pub const DELETE: KeyBinding = KeyBinding::alt('d');
}
