//! Terminal rendering of the picker.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;
