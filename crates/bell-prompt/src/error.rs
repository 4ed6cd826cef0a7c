//! Error types for prompt rendering.

use crate::options::Slot;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum PromptError {
    #[error("{slot} must not be empty")]
    EmptyField { slot: Slot },
}

pub type Result<T> = std::result::Result<T, PromptError>;
