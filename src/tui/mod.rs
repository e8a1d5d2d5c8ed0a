//! Terminal User Interface module
//!
//! Reproduces the original app's tab-based navigation shell with ratatui:
//! Home, History, Transfer, Bills, and Notifications tabs, plus a confirm
//! dialog standing in for the platform alert service.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

pub use app::App;
pub use terminal::run_tui;
