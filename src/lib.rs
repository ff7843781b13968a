//! Segmented key entry for PIN and one-time-code fields.
//!
//! A [`KeyView`] holds a fixed number of key slots. Keystrokes are applied
//! to it one at a time; listeners hear when the text reaches its maximum
//! length and when its error status flips. A [`HideStrategy`] decides which
//! entered characters are masked when the view is drawn.

pub mod error;
pub mod hide;
pub mod input;
pub mod ui;
pub mod view;

pub use error::{KeyViewError, KeyViewResult};
pub use hide::{HideGlyph, HideStrategy, ShouldHide};
pub use input::{InputOutcome, KeyOutcome, Rejection};
pub use view::{Cell, ErrorListener, FinishedListener, KeyFilter, KeyView, KeyViewConfig};
