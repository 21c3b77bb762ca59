//! UI components

pub mod form;
pub mod modal;
pub mod statusbar;
pub mod table;
