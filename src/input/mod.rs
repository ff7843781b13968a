//! Input Module
//!
//! Bounded key buffer, accepted character set and crossterm key routing.

pub mod buffer;
pub mod charset;
pub mod keys;

// Re-exports
pub use buffer::KeyBuffer;
pub use charset::AllowedChars;
pub use keys::{resolve_key, InputOutcome, KeyAction, KeyOutcome, Rejection};
