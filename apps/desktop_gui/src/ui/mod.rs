//! UI layer for the desktop form: app shell, field widgets and the result panel.

pub mod app;
pub mod panels;
pub mod widgets;

pub use app::{AttritionApp, StartupConfig};
