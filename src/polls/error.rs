use thiserror::Error;

/// Errors returned by the poll store.
///
/// Every failure path is a no-op on the store: a failed creation inserts
/// nothing and a failed vote increments nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    #[error("poll id must not be empty")]
    EmptyPollId,

    #[error("poll must have at least one option")]
    NoOptions,

    #[error("poll '{0}' already exists")]
    AlreadyExists(String),

    #[error("poll '{0}' not found")]
    PollNotFound(String),

    #[error("option '{0}' not found")]
    OptionNotFound(String),
}
