//! Parsing and grading of typed answers.

use crate::error::ValidationError;

/// Answers closer than this to the correct value are accepted.
///
/// The band absorbs floating-point noise and also accepts anything within
/// one hundredth, so `5.004` counts as `5`.
pub const ANSWER_TOLERANCE: f64 = 0.01;

/// Parse raw user input into a number.
///
/// Surrounding whitespace is ignored and a bare leading decimal point is
/// read as `0.` (`".5"` is `0.5`, `"-.5"` is `-0.5`). Anything else that is
/// not a finite decimal number is rejected, including trailing text.
pub fn validate_answer(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let normalized = normalize_leading_point(trimmed);
    if !looks_numeric(&normalized) {
        return Err(ValidationError::NotANumber);
    }

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber),
    }
}

/// Whether `user` is within [`ANSWER_TOLERANCE`] of `correct`.
pub fn check_answer(user: f64, correct: f64) -> bool {
    (user - correct).abs() < ANSWER_TOLERANCE
}

fn normalize_leading_point(input: &str) -> String {
    if let Some(rest) = input.strip_prefix('.') {
        format!("0.{rest}")
    } else if let Some(rest) = input.strip_prefix("-.") {
        format!("-0.{rest}")
    } else if let Some(rest) = input.strip_prefix("+.") {
        format!("0.{rest}")
    } else {
        input.to_string()
    }
}

/// Plain decimal notation only: `f64::from_str` would also take `inf`,
/// `NaN` and exponents, none of which a person types as an answer.
fn looks_numeric(input: &str) -> bool {
    let digits = input.strip_prefix(['-', '+']).unwrap_or(input);
    let mut seen_digit = false;
    let mut seen_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}
