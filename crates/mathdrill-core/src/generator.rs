//! Random arithmetic question generation.
//!
//! All randomness comes from the caller's [`Rng`], so a seeded generator
//! reproduces the same question list.

use std::fmt;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::QuizError;
use crate::model::{Difficulty, Operation, Question, QuizConfig};

/// Chance that a hard addition or subtraction uses decimal operands.
pub const DECIMAL_OPERAND_PROBABILITY: f64 = 0.3;

/// A positive operand held as an exact count of hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Operand(i64);

impl Operand {
    fn whole(n: i64) -> Self {
        Operand(n * 100)
    }

    fn hundredths(self) -> i64 {
        self.0
    }

    fn value(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{whole}")
        } else if frac % 10 == 0 {
            write!(f, "{whole}.{}", frac / 10)
        } else {
            write!(f, "{whole}.{frac:02}")
        }
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A reproducible generator for tests and `--seed` runs.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seeded when a seed is given, otherwise seeded from OS entropy.
pub fn rng_from_optional_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => seeded_rng(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate `count` questions, each using an operation drawn uniformly
/// (with replacement) from `operations`.
pub fn generate_questions<R: Rng + ?Sized>(
    rng: &mut R,
    operations: &[Operation],
    difficulty: Difficulty,
    count: usize,
) -> Result<Vec<Question>, QuizError> {
    if operations.is_empty() {
        return Err(QuizError::InvalidConfiguration(
            "at least one operation must be selected".into(),
        ));
    }

    let questions = (0..count)
        .map(|_| {
            let operation = operations[rng.gen_range(0..operations.len())];
            generate_question(rng, operation, difficulty)
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        count = questions.len(),
        %difficulty,
        "generated question list"
    );
    Ok(questions)
}

/// Validate `config` and generate its full question list.
pub fn generate_for_config<R: Rng + ?Sized>(
    rng: &mut R,
    config: &QuizConfig,
) -> Result<Vec<Question>, QuizError> {
    config.validate()?;
    generate_questions(
        rng,
        &config.operation_list(),
        config.difficulty,
        config.question_count as usize,
    )
}

/// Generate a single question for an operation and difficulty.
pub fn generate_question<R: Rng + ?Sized>(
    rng: &mut R,
    operation: Operation,
    difficulty: Difficulty,
) -> Question {
    let (a, b, exact) = match operation {
        Operation::Addition => {
            let (a, b) = additive_operands(rng, difficulty);
            (a, b, (a.hundredths() + b.hundredths()) as f64 / 100.0)
        }
        Operation::Subtraction => {
            let (x, y) = additive_operands(rng, difficulty);
            // Larger operand first keeps the answer non-negative.
            let (a, b) = if x < y { (y, x) } else { (x, y) };
            (a, b, (a.hundredths() - b.hundredths()) as f64 / 100.0)
        }
        Operation::Multiplication => {
            let (left, right) = multiplication_ranges(difficulty);
            let a = Operand::whole(rng.gen_range(left));
            let b = Operand::whole(rng.gen_range(right));
            (a, b, a.value() * b.value())
        }
        Operation::Division => {
            let (divisors, quotients) = division_ranges(difficulty);
            let divisor = rng.gen_range(divisors);
            let quotient = rng.gen_range(quotients);
            let a = Operand::whole(divisor * quotient);
            let b = Operand::whole(divisor);
            (a, b, a.value() / b.value())
        }
    };

    Question {
        text: format!("{a} {} {b}", operation.symbol()),
        correct_answer: round_to_cents(exact),
        operation,
        difficulty,
    }
}

fn integer_range(difficulty: Difficulty) -> RangeInclusive<i64> {
    match difficulty {
        Difficulty::Easy => 1..=9,
        Difficulty::Medium => 10..=999,
        Difficulty::Hard => 100..=9999,
    }
}

fn multiplication_ranges(difficulty: Difficulty) -> (RangeInclusive<i64>, RangeInclusive<i64>) {
    match difficulty {
        Difficulty::Easy => (1..=9, 1..=9),
        Difficulty::Medium => (10..=99, 1..=9),
        Difficulty::Hard => (10..=99, 10..=99),
    }
}

/// (divisor range, quotient range)
fn division_ranges(difficulty: Difficulty) -> (RangeInclusive<i64>, RangeInclusive<i64>) {
    match difficulty {
        Difficulty::Easy => (1..=9, 1..=9),
        Difficulty::Medium => (1..=9, 10..=99),
        Difficulty::Hard => (10..=99, 10..=99),
    }
}

fn decimal_operand<R: Rng + ?Sized>(rng: &mut R) -> Operand {
    let whole: i64 = rng.gen_range(1..=100);
    let frac: i64 = rng.gen_range(0..=99);
    Operand(whole * 100 + frac)
}

fn additive_operands<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> (Operand, Operand) {
    if difficulty == Difficulty::Hard && rng.gen_bool(DECIMAL_OPERAND_PROBABILITY) {
        (decimal_operand(rng), decimal_operand(rng))
    } else {
        let range = integer_range(difficulty);
        (
            Operand::whole(rng.gen_range(range.clone())),
            Operand::whole(rng.gen_range(range)),
        )
    }
}
