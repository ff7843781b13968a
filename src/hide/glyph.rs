//! Placeholder glyphs shown in place of hidden characters

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HideGlyph {
    #[default]
    Dot,
    Asterisk,
    Cross,
    Dash,
}

impl HideGlyph {
    pub const ALL: [HideGlyph; 4] = [Self::Dot, Self::Asterisk, Self::Cross, Self::Dash];

    pub fn as_char(&self) -> char {
        match self {
            Self::Dot => '•',
            Self::Asterisk => '*',
            Self::Cross => 'x',
            Self::Dash => '-',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dot() {
        assert_eq!(HideGlyph::default(), HideGlyph::Dot);
        assert_eq!(HideGlyph::default().as_char(), '•');
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let chars: Vec<char> = HideGlyph::ALL.iter().map(|g| g.as_char()).collect();
        for (i, a) in chars.iter().enumerate() {
            assert!(!chars[i + 1..].contains(a));
        }
    }
}
