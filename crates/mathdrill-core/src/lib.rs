//! mathdrill-core — Question generation, answer grading, and quiz state.
//!
//! This crate defines the data model, the random question generator, the
//! answer validator and the quiz session state machine that the runner and
//! CLI crates drive.

pub mod error;
pub mod generator;
pub mod model;
pub mod report;
pub mod session;
pub mod statistics;
pub mod store;
pub mod validator;

pub use error::{QuizError, SessionError, ValidationError};
pub use model::{AnswerRecord, Difficulty, Operation, Question, QuizConfig};
pub use session::{Feedback, GradeOutcome, Progress, QuizSession, QuizState};
pub use statistics::ResultsSummary;
