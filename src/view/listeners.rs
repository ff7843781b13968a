//! Collaborators notified by, or consulted by, a key view

/// Decides whether entered text is in error, and hears about changes.
pub trait ErrorListener: Send {
    fn has_error(&self, text: &str) -> bool;

    /// Called only when the error status flips.
    fn on_error_status_changed(&mut self, has_error: bool, text: &str);
}

pub trait FinishedListener: Send {
    /// Called whenever the text length lands exactly on the maximum.
    fn on_finished(&mut self, text: &str);
}

impl<F> FinishedListener for F
where
    F: FnMut(&str) + Send,
{
    fn on_finished(&mut self, text: &str) {
        self(text)
    }
}

/// Rejects characters before they reach the buffer.
pub trait KeyFilter: Send {
    fn should_filter(&self, c: char) -> bool;
}

impl<F> KeyFilter for F
where
    F: Fn(char) -> bool + Send,
{
    fn should_filter(&self, c: char) -> bool {
        self(c)
    }
}
