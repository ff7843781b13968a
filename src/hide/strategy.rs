//! Hide Strategies
//!
//! A hide strategy answers one question per rendered slot: given the
//! index of a character and the current text length, should the
//! placeholder glyph be drawn instead of the character?

use std::fmt;
use std::sync::Arc;

use super::HideGlyph;

/// Single-method capability shared by the shipped strategies and custom policies.
///
/// Implementations must be pure functions of their two arguments so that
/// rendering the same text twice produces the same output.
pub trait ShouldHide: Send + Sync {
    fn should_hide(&self, char_index: usize, text_length: usize) -> bool;
}

impl<F> ShouldHide for F
where
    F: Fn(usize, usize) -> bool + Send + Sync,
{
    fn should_hide(&self, char_index: usize, text_length: usize) -> bool {
        self(char_index, text_length)
    }
}

#[derive(Clone, Default)]
pub enum HideStrategy {
    /// Every character is shown.
    #[default]
    HideNone,
    /// Every character is replaced by the glyph.
    HideAll,
    /// Only the most recently typed character is shown.
    HideAllButLast,
    Custom(Arc<dyn ShouldHide>),
}

impl HideStrategy {
    pub fn custom<F>(policy: F) -> Self
    where
        F: Fn(usize, usize) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(policy))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HideNone => "hide-none",
            Self::HideAll => "hide-all",
            Self::HideAllButLast => "hide-all-but-last",
            Self::Custom(_) => "custom",
        }
    }
}

impl ShouldHide for HideStrategy {
    fn should_hide(&self, char_index: usize, text_length: usize) -> bool {
        match self {
            Self::HideNone => false,
            Self::HideAll => true,
            // Empty text exposes no index at all.
            Self::HideAllButLast => text_length == 0 || char_index != text_length - 1,
            Self::Custom(policy) => policy.should_hide(char_index, text_length),
        }
    }
}

impl fmt::Debug for HideStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `text` the way a key view displays it.
pub fn mask(text: &str, strategy: &dyn ShouldHide, glyph: HideGlyph) -> String {
    let len = text.chars().count();
    text.chars()
        .enumerate()
        .map(|(i, c)| if strategy.should_hide(i, len) { glyph.as_char() } else { c })
        .collect()
}
