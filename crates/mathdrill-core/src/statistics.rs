//! Results aggregation for a finished quiz.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{AnswerRecord, Operation, Question};

/// Outcome of one question, paired with its answer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question: Question,
    /// `None` when the question timed out or was never answered.
    pub user_answer: Option<f64>,
    pub correct_answer: f64,
    pub is_correct: bool,
    pub time_spent_seconds: f64,
}

/// Accuracy for a single operation within one quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationStats {
    pub total: usize,
    pub correct: usize,
    pub accuracy_percent: f64,
}

/// Summary of a finished quiz. Recomputed from scratch on every finish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsSummary {
    pub total_questions: usize,
    pub correct_count: usize,
    /// Questions that ran out of time or were never answered.
    pub unanswered_count: usize,
    pub accuracy_percent: f64,
    pub average_time_seconds: f64,
    pub total_time_seconds: f64,
    pub question_results: Vec<QuestionResult>,
    pub per_operation: BTreeMap<Operation, OperationStats>,
}

/// `correct / total` as a percentage, or 0 for an empty quiz.
pub fn accuracy_percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    }
}

/// Pair every question with its answer record and aggregate.
///
/// `answers` is indexed by question position; a missing or `None` entry is
/// treated as an unanswered question that took no time.
pub fn summarize(questions: &[Question], answers: &[Option<AnswerRecord>]) -> ResultsSummary {
    let question_results: Vec<QuestionResult> = questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let record = answers.get(i).and_then(Option::as_ref);
            QuestionResult {
                question: question.clone(),
                user_answer: record.and_then(|r| r.submitted),
                correct_answer: question.correct_answer,
                is_correct: record.is_some_and(|r| r.is_correct),
                time_spent_seconds: record.map(|r| r.time_spent_seconds).unwrap_or(0.0),
            }
        })
        .collect();

    let total_questions = question_results.len();
    let correct_count = question_results.iter().filter(|r| r.is_correct).count();
    let unanswered_count = question_results
        .iter()
        .filter(|r| r.user_answer.is_none())
        .count();
    let total_time_seconds: f64 = question_results.iter().map(|r| r.time_spent_seconds).sum();
    let average_time_seconds = if total_questions == 0 {
        0.0
    } else {
        total_time_seconds / total_questions as f64
    };

    let mut counts: BTreeMap<Operation, (usize, usize)> = BTreeMap::new();
    for r in &question_results {
        let entry = counts.entry(r.question.operation).or_default();
        entry.0 += 1;
        if r.is_correct {
            entry.1 += 1;
        }
    }
    let per_operation = counts
        .into_iter()
        .map(|(op, (total, correct))| {
            (
                op,
                OperationStats {
                    total,
                    correct,
                    accuracy_percent: accuracy_percent(correct, total),
                },
            )
        })
        .collect();

    ResultsSummary {
        total_questions,
        correct_count,
        unanswered_count,
        accuracy_percent: accuracy_percent(correct_count, total_questions),
        average_time_seconds,
        total_time_seconds,
        question_results,
        per_operation,
    }
}
