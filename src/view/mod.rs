//! Key View
//!
//! The key entry state machine, its listeners and configuration.

mod config;
mod controller;
mod listeners;

pub use config::KeyViewConfig;
pub use controller::{Cell, KeyView};
pub use listeners::{ErrorListener, FinishedListener, KeyFilter};
