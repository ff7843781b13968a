//! UI Components
//!
//! Ratatui widgets for key entry.

pub mod dialogs;
pub mod key_field;
pub mod layout;

// Re-exports
pub use dialogs::KeyDialog;
pub use key_field::KeyField;
