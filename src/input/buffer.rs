//! Key Buffer
//!
//! Bounded, append-only text store for entered keys. Content is wiped
//! from memory when cleared or dropped, and the buffer never lets `String`
//! reallocate on its own: growth copies into a new allocation and wipes
//! the old one.

use std::fmt;

use zeroize::{Zeroize, Zeroizing};

/// Upper bound on bytes reserved up front
const MAX_PREALLOC: usize = 4096;

pub struct KeyBuffer {
    content: Zeroizing<String>,
    capacity: usize,
}

impl KeyBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            content: Zeroizing::new(String::with_capacity(
                capacity.saturating_mul(4).min(MAX_PREALLOC),
            )),
            capacity,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Append one character. Returns `false` when the buffer is full.
    pub fn push(&mut self, c: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.reserve(c.len_utf8());
        self.content.push(c);
        true
    }

    /// Bytes currently allocated for content.
    pub fn allocated(&self) -> usize {
        self.content.capacity()
    }

    fn reserve(&mut self, additional: usize) {
        let needed = self.content.len() + additional;
        if needed <= self.content.capacity() {
            return;
        }
        let mut grown = Zeroizing::new(String::with_capacity(
            needed.max(self.content.capacity().saturating_mul(2)),
        ));
        grown.push_str(&self.content);
        // The previous allocation is wiped when it drops here.
        self.content = grown;
    }

    /// Remove the last character, if any.
    pub fn pop(&mut self) -> Option<char> {
        self.content.pop()
    }

    pub fn clear(&mut self) {
        self.content.zeroize();
    }

    /// Replace the content, keeping at most `capacity` characters.
    /// Returns the number of characters dropped.
    pub fn replace(&mut self, text: &str) -> usize {
        self.clear();
        let total = text.chars().count();
        for c in text.chars().take(self.capacity) {
            self.reserve(c.len_utf8());
            self.content.push(c);
        }
        total.saturating_sub(self.capacity)
    }

    /// Change capacity. Any existing content is discarded.
    pub fn reset(&mut self, capacity: usize) {
        self.clear();
        self.capacity = capacity;
    }
}

// Debug impl that doesn't leak entered keys
impl fmt::Debug for KeyBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBuffer")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
