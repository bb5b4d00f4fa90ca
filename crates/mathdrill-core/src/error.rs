//! Quiz error types.
//!
//! Configuration problems block a quiz from starting, validation problems
//! ask the user to re-enter an answer, and session errors reject a
//! transition without touching the session state.

use thiserror::Error;

/// Errors raised while configuring a quiz or generating its questions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The configuration cannot produce a quiz (e.g. no operations selected).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An operation name or symbol outside the supported set.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Why a raw answer could not be read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing but whitespace was entered.
    #[error("Please enter an answer")]
    Empty,

    /// The input is not a finite decimal number.
    #[error("Please enter a valid number")]
    NotANumber,
}

/// A session transition that was rejected. The session is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The transition needs a running quiz.
    #[error("no quiz is in progress")]
    NotActive,

    /// A quiz is already running or its results have not been reset.
    #[error("a quiz is already in progress or finished; reset it first")]
    NotIdle,

    /// The configuration cannot change while a quiz is running.
    #[error("cannot change the configuration while a quiz is in progress")]
    InProgress,

    /// The current question already has an answer record.
    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },

    /// The submitted text was not a usable answer.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Starting the quiz failed.
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl SessionError {
    /// Returns `true` if the user can fix this by typing a different answer.
    pub fn is_retryable_input(&self) -> bool {
        matches!(self, SessionError::Invalid(_))
    }
}
