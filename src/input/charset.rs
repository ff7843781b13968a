//! Characters eligible for key entry

use std::ops::RangeInclusive;

const ASCII_PRINTABLE: RangeInclusive<char> = ' '..='~';

/// Printable ASCII, 32 through 126 inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllowedChars;

impl AllowedChars {
    pub fn contains(&self, c: char) -> bool {
        ASCII_PRINTABLE.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> {
        ASCII_PRINTABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_bounds() {
        let allowed = AllowedChars;
        assert!(allowed.contains(' '));
        assert!(allowed.contains('~'));
        assert!(allowed.contains('0'));
        assert!(allowed.contains('Z'));
        assert!(!allowed.contains('\u{1f}'));
        assert!(!allowed.contains('\u{7f}'));
        assert!(!allowed.contains('\n'));
        assert!(!allowed.contains('é'));
    }

    #[test]
    fn test_iter_covers_range() {
        assert_eq!(AllowedChars.iter().count(), 95);
        assert_eq!(AllowedChars.iter().next(), Some(' '));
        assert_eq!(AllowedChars.iter().last(), Some('~'));
    }
}
