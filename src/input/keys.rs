//! Key Routing
//!
//! Maps crossterm key events onto key view actions. Delete and enter win
//! over character input; characters outside the allowed set are ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::AllowedChars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Delete,
    Enter,
    Input(char),
    Ignore,
}

/// Why a keystroke left the text untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AtCapacity,
    Filtered,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Accepted,
    Rejected(Rejection),
}

impl InputOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Result of routing a key event through a key view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled(InputOutcome),
    /// Enter was pressed; the host should dismiss its input surface.
    Submitted,
    Unhandled,
}

impl KeyOutcome {
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Unhandled)
    }
}

pub fn resolve_key(key: KeyEvent, allowed: &AllowedChars) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Backspace | KeyCode::Delete, _) => KeyAction::Delete,
        (KeyCode::Enter, _) => KeyAction::Enter,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if allowed.contains(c) => {
            KeyAction::Input(c)
        }
        _ => KeyAction::Ignore,
    }
}
