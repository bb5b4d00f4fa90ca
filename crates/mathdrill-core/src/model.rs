//! Core data model types for mathdrill.
//!
//! Operations, difficulty tiers, generated questions, the quiz
//! configuration, and the per-question answer records.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Question counts offered by the setup screen.
pub const QUESTION_COUNT_RANGE: RangeInclusive<u32> = 5..=50;
/// Step between offered question counts.
pub const QUESTION_COUNT_STEP: u32 = 5;
/// Per-question timer durations offered by the setup screen, in seconds.
pub const TIMER_SECONDS_RANGE: RangeInclusive<u32> = 5..=60;
/// Step between offered timer durations.
pub const TIMER_SECONDS_STEP: u32 = 5;

/// One of the four supported arithmetic operations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// The conventional symbol used in question text.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }

    /// Capitalized name for labels ("Addition (+)").
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition => write!(f, "addition"),
            Operation::Subtraction => write!(f, "subtraction"),
            Operation::Multiplication => write!(f, "multiplication"),
            Operation::Division => write!(f, "division"),
        }
    }
}

impl FromStr for Operation {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "addition" | "add" | "+" => Ok(Operation::Addition),
            "subtraction" | "sub" | "-" => Ok(Operation::Subtraction),
            "multiplication" | "mul" | "×" | "x" | "*" => Ok(Operation::Multiplication),
            "division" | "div" | "÷" | "/" => Ok(Operation::Division),
            other => Err(QuizError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// Parse a comma-separated operation list such as `"add,×,division"`.
pub fn parse_operations(list: &str) -> Result<BTreeSet<Operation>, QuizError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// Operand magnitude tier, ordered from smallest to largest numbers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Short description shown next to the difficulty choice.
    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Single digits (1-9)",
            Difficulty::Medium => "Two to three digits (10-999)",
            Difficulty::Hard => "Large numbers and decimals",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A generated arithmetic problem. Never mutated after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Rendered problem, e.g. `"12 × 7"`.
    pub text: String,
    /// Exact result rounded to two decimal places.
    pub correct_answer: f64,
    pub operation: Operation,
    pub difficulty: Difficulty,
}

/// The grade recorded for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The parsed answer, or `None` when the timer ran out.
    pub submitted: Option<f64>,
    pub is_correct: bool,
    /// Seconds between presenting the question and the answer (or timeout).
    pub time_spent_seconds: f64,
}

impl AnswerRecord {
    pub fn answered(value: f64, is_correct: bool, time_spent_seconds: f64) -> Self {
        Self {
            submitted: Some(value),
            is_correct,
            time_spent_seconds: time_spent_seconds.max(0.0),
        }
    }

    pub fn timed_out(timer_seconds: u32) -> Self {
        Self {
            submitted: None,
            is_correct: false,
            time_spent_seconds: f64::from(timer_seconds),
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.submitted.is_none()
    }
}

/// User-facing quiz settings.
///
/// Every field falls back to its default when missing, so a partially
/// stored configuration is merged over the defaults field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Operations to draw questions from. Must be non-empty to start.
    pub operations: BTreeSet<Operation>,
    pub difficulty: Difficulty,
    pub question_count: u32,
    pub timer_enabled: bool,
    pub timer_seconds: u32,
    /// Move on automatically after a correct answer.
    pub auto_advance: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            operations: BTreeSet::new(),
            difficulty: Difficulty::Medium,
            question_count: 10,
            timer_enabled: false,
            timer_seconds: 30,
            auto_advance: false,
        }
    }
}

impl QuizConfig {
    /// Check the invariants a quiz needs before it can start.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.operations.is_empty() {
            return Err(QuizError::InvalidConfiguration(
                "Please select at least one operation".into(),
            ));
        }
        if self.question_count == 0 {
            return Err(QuizError::InvalidConfiguration(
                "question count must be at least 1".into(),
            ));
        }
        if self.timer_seconds == 0 {
            return Err(QuizError::InvalidConfiguration(
                "timer duration must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// The per-question time limit, if the timer is enabled.
    pub fn time_limit(&self) -> Option<Duration> {
        self.timer_enabled
            .then(|| Duration::from_secs(u64::from(self.timer_seconds)))
    }

    /// Operations in a stable order.
    pub fn operation_list(&self) -> Vec<Operation> {
        self.operations.iter().copied().collect()
    }
}
