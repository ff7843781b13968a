//! Key View Configuration
//!
//! Length, hide policy and presentation settings for a key view.

use ratatui::style::Color;

use crate::error::{KeyViewError, KeyViewResult};
use crate::hide::{HideGlyph, HideStrategy};

/// Key view configuration
#[derive(Debug, Clone)]
pub struct KeyViewConfig {
    pub max_length: usize,
    pub hide_strategy: HideStrategy,
    pub hide_glyph: HideGlyph,
    pub text_color: Color,
    pub underline_color: Color,
    /// Columns per slot
    pub cell_width: u16,
    /// Columns between slots
    pub spacing: u16,
    /// Rows between the character row and the underline row
    pub underline_padding: u16,
}

impl Default for KeyViewConfig {
    fn default() -> Self {
        Self {
            max_length: 1,
            hide_strategy: HideStrategy::HideNone,
            hide_glyph: HideGlyph::Dot,
            text_color: Color::White,
            underline_color: Color::White,
            cell_width: 3,
            spacing: 1,
            underline_padding: 0,
        }
    }
}

impl KeyViewConfig {
    /// PIN entry: only the last typed digit stays readable
    pub fn pin(length: usize) -> Self {
        Self {
            max_length: length,
            hide_strategy: HideStrategy::HideAllButLast,
            text_color: Color::Yellow,
            underline_color: Color::DarkGray,
            ..Self::default()
        }
    }

    /// One-time codes are shown in clear
    pub fn otp(length: usize) -> Self {
        Self {
            max_length: length,
            hide_strategy: HideStrategy::HideNone,
            text_color: Color::Cyan,
            underline_color: Color::DarkGray,
            ..Self::default()
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_hide_strategy(mut self, strategy: HideStrategy) -> Self {
        self.hide_strategy = strategy;
        self
    }

    pub fn with_hide_glyph(mut self, glyph: HideGlyph) -> Self {
        self.hide_glyph = glyph;
        self
    }

    pub fn with_colors(mut self, text: Color, underline: Color) -> Self {
        self.text_color = text;
        self.underline_color = underline;
        self
    }

    pub fn with_spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_cell_width(mut self, cell_width: u16) -> Self {
        self.cell_width = cell_width.max(1);
        self
    }

    pub fn with_underline_padding(mut self, padding: u16) -> Self {
        self.underline_padding = padding;
        self
    }

    pub fn validate(&self) -> KeyViewResult<()> {
        if self.max_length == 0 {
            return Err(KeyViewError::InvalidConfiguration { max_length: self.max_length });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(KeyViewConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_length_rejected() {
        let config = KeyViewConfig::default().with_max_length(0);
        assert_eq!(
            config.validate(),
            Err(KeyViewError::InvalidConfiguration { max_length: 0 })
        );
    }

    #[test]
    fn test_presets() {
        let pin = KeyViewConfig::pin(4);
        assert_eq!(pin.max_length, 4);
        assert_eq!(pin.hide_strategy.name(), "hide-all-but-last");

        let otp = KeyViewConfig::otp(6);
        assert_eq!(otp.max_length, 6);
        assert_eq!(otp.hide_strategy.name(), "hide-none");
    }

    #[test]
    fn test_cell_width_at_least_one() {
        assert_eq!(KeyViewConfig::default().with_cell_width(0).cell_width, 1);
    }
}
