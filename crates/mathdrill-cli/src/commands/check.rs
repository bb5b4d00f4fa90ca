//! The `mathdrill check` command.

use anyhow::Result;

use mathdrill_core::session::Feedback;
use mathdrill_core::validator::{check_answer, validate_answer};

pub fn execute(answer: String, expected: f64) -> Result<()> {
    let value = validate_answer(&answer)?;

    let feedback = if check_answer(value, expected) {
        Feedback::Correct
    } else {
        Feedback::Incorrect {
            correct_answer: expected,
        }
    };
    println!("{}", feedback.message());

    if !feedback.is_correct() {
        std::process::exit(1);
    }

    Ok(())
}
