//! View layer: rendering
//!
//! Pure functions from `&App` to a frame. Nothing here mutates state; every
//! frame is drawn from scratch.
//!
//! ```text
//!     ┌──────────────────────── title bar ─────────────────────────┐
//!     │ ┌─ form ──────────────┐ ┌─ customers ─────────────────────┐ │
//!     │ │ Surname *           │ │ ID  Surname  Name  Address  Tel │ │
//!     │ │   Smith▎            │ │ ▶ 1 Smith    John  ...          │ │
//!     │ │ ...                 │ │                                 │ │
//!     │ │ ⚠ inline error      │ │                                 │ │
//!     │ │ [ Clear ] [ Submit ]│ │                                 │ │
//!     │ └─────────────────────┘ └─────────────────────────────────┘ │
//!     └──────────────────────── status bar ────────────────────────┘
//! ```
//!
//! The help modal is drawn last, on top of everything else.

mod components;
mod layout;
pub mod theme;

pub use layout::render;
