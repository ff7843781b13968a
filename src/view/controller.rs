//! Key View State Machine
//!
//! Owns the entered text and applies keystrokes to it. After every change
//! of the text the error status and the finish condition are re-evaluated.
//!
//! All mutation goes through `&mut self`, so the checks for one view never
//! interleave. Hosts sharing a view across threads wrap it in a mutex.

use std::fmt;

use crossterm::event::KeyEvent;

use super::{ErrorListener, FinishedListener, KeyFilter, KeyViewConfig};
use crate::error::{KeyViewError, KeyViewResult};
use crate::hide::{mask, HideGlyph, HideStrategy, ShouldHide};
use crate::input::{resolve_key, AllowedChars, InputOutcome, KeyAction, KeyBuffer, KeyOutcome, Rejection};

/// What a single slot of the view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Filled(char),
    Hidden(char),
    Empty,
}

pub struct KeyView {
    config: KeyViewConfig,
    buffer: KeyBuffer,
    allowed: AllowedChars,
    previously_had_error: bool,
    error_listener: Option<Box<dyn ErrorListener>>,
    finished_listener: Option<Box<dyn FinishedListener>>,
    key_filter: Option<Box<dyn KeyFilter>>,
}

impl KeyView {
    pub fn new(max_length: usize) -> KeyViewResult<Self> {
        Self::from_config(KeyViewConfig::default().with_max_length(max_length))
    }

    pub fn from_config(config: KeyViewConfig) -> KeyViewResult<Self> {
        config.validate()?;
        Ok(Self {
            buffer: KeyBuffer::new(config.max_length),
            config,
            allowed: AllowedChars,
            previously_had_error: false,
            error_listener: None,
            finished_listener: None,
            key_filter: None,
        })
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Change the maximum length. Entered text is discarded.
    pub fn configure(&mut self, max_length: usize) -> KeyViewResult<()> {
        if max_length == 0 {
            return Err(KeyViewError::InvalidConfiguration { max_length });
        }
        self.config.max_length = max_length;
        self.buffer.reset(max_length);
        self.text_changed();
        Ok(())
    }

    pub fn config(&self) -> &KeyViewConfig {
        &self.config
    }

    pub fn set_hide_strategy(&mut self, strategy: HideStrategy) {
        self.config.hide_strategy = strategy;
    }

    pub fn hide_strategy(&self) -> &HideStrategy {
        &self.config.hide_strategy
    }

    pub fn set_hide_glyph(&mut self, glyph: HideGlyph) {
        self.config.hide_glyph = glyph;
    }

    pub fn hide_glyph(&self) -> HideGlyph {
        self.config.hide_glyph
    }

    pub fn set_error_listener(&mut self, listener: impl ErrorListener + 'static) {
        self.error_listener = Some(Box::new(listener));
    }

    pub fn clear_error_listener(&mut self) {
        self.error_listener = None;
    }

    pub fn set_finished_listener(&mut self, listener: impl FinishedListener + 'static) {
        self.finished_listener = Some(Box::new(listener));
    }

    pub fn clear_finished_listener(&mut self) {
        self.finished_listener = None;
    }

    pub fn set_key_filter(&mut self, filter: impl KeyFilter + 'static) {
        self.key_filter = Some(Box::new(filter));
    }

    pub fn clear_key_filter(&mut self) {
        self.key_filter = None;
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    pub fn text(&self) -> &str {
        self.buffer.content()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.config.max_length
    }

    pub fn remaining(&self) -> usize {
        self.max_length().saturating_sub(self.len())
    }

    pub fn is_finished(&self) -> bool {
        self.len() == self.max_length()
    }

    /// Error status as of the last check
    pub fn has_error(&self) -> bool {
        self.previously_had_error
    }

    pub fn display_text(&self) -> String {
        mask(self.text(), &self.config.hide_strategy, self.config.hide_glyph)
    }

    /// One entry per slot, `max_length` in total.
    pub fn cells(&self) -> Vec<Cell> {
        let len = self.len();
        let glyph = self.config.hide_glyph.as_char();
        let mut cells: Vec<Cell> = self
            .text()
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if self.config.hide_strategy.should_hide(i, len) {
                    Cell::Hidden(glyph)
                } else {
                    Cell::Filled(c)
                }
            })
            .collect();
        cells.resize(self.max_length(), Cell::Empty);
        cells
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match resolve_key(key, &self.allowed) {
            KeyAction::Delete => KeyOutcome::Handled(self.handle_delete()),
            KeyAction::Enter => self.handle_enter(),
            KeyAction::Input(c) => KeyOutcome::Handled(self.handle_char(c)),
            KeyAction::Ignore => KeyOutcome::Unhandled,
        }
    }

    pub fn handle_char(&mut self, c: char) -> InputOutcome {
        if self.buffer.is_full() {
            tracing::debug!(target: "keyview", "Attempt to write longer than maximum ({})", self.max_length());
            return InputOutcome::Rejected(Rejection::AtCapacity);
        }

        if self.key_filter.as_ref().is_some_and(|f| f.should_filter(c)) {
            tracing::debug!(target: "keyview", "Key {:?} has been filtered", c);
            return InputOutcome::Rejected(Rejection::Filtered);
        }

        self.buffer.push(c);
        self.text_changed();
        InputOutcome::Accepted
    }

    pub fn handle_delete(&mut self) -> InputOutcome {
        if self.buffer.pop().is_none() {
            tracing::debug!(target: "keyview", "Attempt to delete when empty");
            return InputOutcome::Rejected(Rejection::Empty);
        }

        self.text_changed();
        InputOutcome::Accepted
    }

    /// Text is left as is; the host dismisses its input surface.
    pub fn handle_enter(&mut self) -> KeyOutcome {
        tracing::trace!(target: "keyview", "Enter pressed with {} of {} keys", self.len(), self.max_length());
        KeyOutcome::Submitted
    }

    /// Replace the whole text. Characters beyond the maximum are dropped.
    pub fn set_text(&mut self, text: &str) {
        let dropped = self.buffer.replace(text);
        if dropped > 0 {
            tracing::debug!(target: "keyview", "Dropped {} keys beyond maximum ({})", dropped, self.max_length());
        }
        self.text_changed();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.text_changed();
    }

    // ------------------------------------------------------------------
    // Checks
    // ------------------------------------------------------------------

    fn text_changed(&mut self) {
        self.check_for_errors();
        self.check_for_finish();
    }

    fn check_for_errors(&mut self) {
        let Some(listener) = self.error_listener.as_mut() else { return };
        let text = self.buffer.content();

        let has_error = listener.has_error(text);
        if has_error != self.previously_had_error {
            tracing::trace!(target: "keyview", "Error status changed to {}", has_error);
            listener.on_error_status_changed(has_error, text);
        }
        self.previously_had_error = has_error;
    }

    fn check_for_finish(&mut self) {
        if self.buffer.len() != self.config.max_length {
            return;
        }
        let Some(listener) = self.finished_listener.as_mut() else { return };
        tracing::trace!(target: "keyview", "Key entry finished");
        listener.on_finished(self.buffer.content());
    }
}

impl fmt::Debug for KeyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyView")
            .field("buffer", &self.buffer)
            .field("hide_strategy", &self.config.hide_strategy)
            .field("has_error", &self.previously_had_error)
            .field("error_listener", &self.error_listener.is_some())
            .field("finished_listener", &self.finished_listener.is_some())
            .field("key_filter", &self.key_filter.is_some())
            .finish()
    }
}
