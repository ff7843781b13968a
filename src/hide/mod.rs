//! Hide Module
//!
//! Policies deciding which entered characters are masked on screen.

pub mod glyph;
pub mod strategy;

// Re-exports
pub use glyph::HideGlyph;
pub use strategy::{mask, HideStrategy, ShouldHide};
