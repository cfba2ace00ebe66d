//! Snap-to-item wheel selector columns and a terminal host for them.

pub mod app;
pub mod config;
pub mod demo;
pub mod error;
pub mod events;
pub mod log;
pub mod picker;
pub mod tui;
