//! UI Module
//!
//! Terminal rendering of key views using ratatui.

pub mod components;

// Re-exports
pub use components::{KeyDialog, KeyField};
