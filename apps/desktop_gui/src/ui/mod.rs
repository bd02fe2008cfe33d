//! UI layer for the desktop reading form: app shell, form draft, and platform adapters.

pub mod app;
mod clipboard;
mod draft;
mod save_dialog;

pub use app::ReadingApp;
