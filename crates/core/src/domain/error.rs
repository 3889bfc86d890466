// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Target must not be empty")]
    EmptyTarget,

    #[error("Target must not start with '-': {0}")]
    FlagLikeTarget(String),

    #[error("Target must not contain whitespace: {0}")]
    WhitespaceInTarget(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
