//! Error types
//!
//! Only configuration can fail. Rejected keystrokes are reported as
//! [`InputOutcome`](crate::input::InputOutcome) values, never as errors.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyViewError {
    #[error("invalid configuration: max length must be positive (got {max_length})")]
    InvalidConfiguration { max_length: usize },
}

pub type KeyViewResult<T> = Result<T, KeyViewError>;
