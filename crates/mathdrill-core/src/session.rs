//! Quiz session state machine.
//!
//! [`QuizState`] is the bare `Idle -> Active -> Finished` machine: each
//! event is applied by [`QuizState::apply`], which checks the event against
//! the current state before changing anything, so a rejected event leaves
//! the state untouched. [`QuizSession`] layers the configuration and the
//! follow-up policies on top (auto-advance after a correct answer, advance
//! after every timeout).

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::{QuizError, SessionError};
use crate::generator::generate_for_config;
use crate::model::{AnswerRecord, Question, QuizConfig};
use crate::statistics::{summarize, ResultsSummary};
use crate::validator::{check_answer, validate_answer};

/// Something that happened to the quiz, stamped with when it happened.
#[derive(Debug, Clone)]
pub enum QuizEvent<'a> {
    Start {
        questions: Vec<Question>,
        at: DateTime<Utc>,
    },
    Submit {
        raw: &'a str,
        at: DateTime<Utc>,
    },
    Timeout {
        timer_seconds: u32,
    },
    Advance {
        at: DateTime<Utc>,
    },
    Reset,
}

/// What an accepted event did.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Started { question_count: usize },
    Graded { index: usize, record: AnswerRecord },
    TimedOut { index: usize, record: AnswerRecord },
    Advanced { index: usize },
    Finished,
    Reset,
}

/// A quiz in progress.
#[derive(Debug, Clone)]
pub struct ActiveQuiz {
    questions: Vec<Question>,
    current_index: usize,
    answers: Vec<Option<AnswerRecord>>,
    started_at: DateTime<Utc>,
    presented_at: DateTime<Utc>,
}

impl ActiveQuiz {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// The answer record for question `index`, if one was recorded.
    pub fn answer(&self, index: usize) -> Option<&AnswerRecord> {
        self.answers.get(index).and_then(Option::as_ref)
    }

    pub fn is_answered(&self) -> bool {
        self.answer(self.current_index).is_some()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the current question was shown.
    pub fn presented_at(&self) -> DateTime<Utc> {
        self.presented_at
    }

    /// Share of questions already left behind, `0..100`.
    pub fn progress_percent(&self) -> f64 {
        self.current_index as f64 / self.questions.len() as f64 * 100.0
    }

    fn record(&mut self, record: AnswerRecord) -> usize {
        let index = self.current_index;
        self.answers[index] = Some(record);
        index
    }

    fn finish(&mut self, at: DateTime<Utc>) -> FinishedQuiz {
        let questions = std::mem::take(&mut self.questions);
        let answers = std::mem::take(&mut self.answers);
        let summary = summarize(&questions, &answers);
        FinishedQuiz {
            questions,
            answers,
            started_at: self.started_at,
            finished_at: at,
            summary,
        }
    }
}

/// A completed quiz and its results.
#[derive(Debug, Clone)]
pub struct FinishedQuiz {
    questions: Vec<Question>,
    answers: Vec<Option<AnswerRecord>>,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    summary: ResultsSummary,
}

impl FinishedQuiz {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<AnswerRecord>] {
        &self.answers
    }

    pub fn summary(&self) -> &ResultsSummary {
        &self.summary
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}

/// The three phases of a quiz.
#[derive(Debug, Clone, Default)]
pub enum QuizState {
    #[default]
    Idle,
    Active(ActiveQuiz),
    Finished(FinishedQuiz),
}

impl QuizState {
    /// Apply one event. On error the state is unchanged.
    pub fn apply(&mut self, event: QuizEvent<'_>) -> Result<Transition, SessionError> {
        let transition = match event {
            QuizEvent::Start { questions, at } => self.start(questions, at),
            QuizEvent::Submit { raw, at } => self.submit(raw, at),
            QuizEvent::Timeout { timer_seconds } => self.time_out(timer_seconds),
            QuizEvent::Advance { at } => self.advance(at),
            QuizEvent::Reset => {
                *self = QuizState::Idle;
                Ok(Transition::Reset)
            }
        }?;
        tracing::debug!(?transition, "quiz transition");
        Ok(transition)
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuizState::Idle => "idle",
            QuizState::Active(_) => "active",
            QuizState::Finished(_) => "finished",
        }
    }

    fn start(
        &mut self,
        questions: Vec<Question>,
        at: DateTime<Utc>,
    ) -> Result<Transition, SessionError> {
        if !matches!(self, QuizState::Idle) {
            return Err(SessionError::NotIdle);
        }
        if questions.is_empty() {
            return Err(QuizError::InvalidConfiguration("the quiz has no questions".into()).into());
        }

        let question_count = questions.len();
        *self = QuizState::Active(ActiveQuiz {
            answers: vec![None; question_count],
            questions,
            current_index: 0,
            started_at: at,
            presented_at: at,
        });
        Ok(Transition::Started { question_count })
    }

    fn submit(&mut self, raw: &str, at: DateTime<Utc>) -> Result<Transition, SessionError> {
        let QuizState::Active(quiz) = self else {
            return Err(SessionError::NotActive);
        };
        if quiz.is_answered() {
            return Err(SessionError::AlreadyAnswered {
                index: quiz.current_index,
            });
        }

        let value = validate_answer(raw)?;
        let is_correct = check_answer(value, quiz.current_question().correct_answer);
        let record = AnswerRecord::answered(
            value,
            is_correct,
            seconds_between(quiz.presented_at, at),
        );
        let index = quiz.record(record.clone());
        Ok(Transition::Graded { index, record })
    }

    fn time_out(&mut self, timer_seconds: u32) -> Result<Transition, SessionError> {
        let QuizState::Active(quiz) = self else {
            return Err(SessionError::NotActive);
        };
        if quiz.is_answered() {
            return Err(SessionError::AlreadyAnswered {
                index: quiz.current_index,
            });
        }

        let record = AnswerRecord::timed_out(timer_seconds);
        let index = quiz.record(record.clone());
        Ok(Transition::TimedOut { index, record })
    }

    fn advance(&mut self, at: DateTime<Utc>) -> Result<Transition, SessionError> {
        let QuizState::Active(quiz) = self else {
            return Err(SessionError::NotActive);
        };

        if !quiz.is_last_question() {
            quiz.current_index += 1;
            quiz.presented_at = at;
            return Ok(Transition::Advanced {
                index: quiz.current_index,
            });
        }

        let finished = quiz.finish(at);
        *self = QuizState::Finished(finished);
        Ok(Transition::Finished)
    }
}

fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    ((to - from).num_milliseconds() as f64 / 1000.0).max(0.0)
}

/// The verdict shown after a question is graded or times out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feedback {
    Correct,
    Incorrect { correct_answer: f64 },
    TimedOut { correct_answer: f64 },
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::Correct => "Correct!".to_string(),
            Feedback::Incorrect { correct_answer } => {
                format!("Incorrect. The correct answer was {correct_answer}")
            }
            Feedback::TimedOut { correct_answer } => {
                format!("Time's up! The correct answer was {correct_answer}")
            }
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

/// Where the quiz stands after a policy step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Still on the same question, waiting for an explicit advance.
    Stayed,
    Advanced { index: usize },
    Finished,
}

impl From<&Transition> for Progress {
    fn from(transition: &Transition) -> Self {
        match transition {
            Transition::Advanced { index } => Progress::Advanced { index: *index },
            Transition::Finished => Progress::Finished,
            _ => Progress::Stayed,
        }
    }
}

/// Result of grading one question (by answer or by timeout).
#[derive(Debug, Clone, PartialEq)]
pub struct GradeOutcome {
    pub index: usize,
    pub record: AnswerRecord,
    pub feedback: Feedback,
    pub progress: Progress,
}

/// A quiz session: configuration plus state, with the follow-up policies.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    config: QuizConfig,
    state: QuizState,
}

impl QuizSession {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            state: QuizState::Idle,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Replace the configuration. Not allowed while a quiz is running.
    pub fn set_config(&mut self, config: QuizConfig) -> Result<(), SessionError> {
        if self.is_active() {
            return Err(SessionError::InProgress);
        }
        self.config = config;
        Ok(())
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, QuizState::Active(_))
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, QuizState::Finished(_))
    }

    pub fn active(&self) -> Option<&ActiveQuiz> {
        match &self.state {
            QuizState::Active(quiz) => Some(quiz),
            _ => None,
        }
    }

    pub fn finished(&self) -> Option<&FinishedQuiz> {
        match &self.state {
            QuizState::Finished(done) => Some(done),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.active().map(ActiveQuiz::current_question)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.active().map(ActiveQuiz::current_index)
    }

    pub fn is_answered(&self) -> bool {
        self.active().is_some_and(ActiveQuiz::is_answered)
    }

    pub fn progress_percent(&self) -> f64 {
        match &self.state {
            QuizState::Idle => 0.0,
            QuizState::Active(quiz) => quiz.progress_percent(),
            QuizState::Finished(_) => 100.0,
        }
    }

    pub fn summary(&self) -> Option<&ResultsSummary> {
        self.finished().map(FinishedQuiz::summary)
    }

    /// Generate questions from the configuration and start the quiz.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        at: DateTime<Utc>,
    ) -> Result<usize, SessionError> {
        if !matches!(self.state, QuizState::Idle) {
            return Err(SessionError::NotIdle);
        }
        let questions = generate_for_config(rng, &self.config)?;
        self.start_with_questions(questions, at)
    }

    /// Start the quiz with a prepared question list.
    pub fn start_with_questions(
        &mut self,
        questions: Vec<Question>,
        at: DateTime<Utc>,
    ) -> Result<usize, SessionError> {
        match self.state.apply(QuizEvent::Start { questions, at })? {
            Transition::Started { question_count } => {
                tracing::info!(
                    question_count,
                    difficulty = %self.config.difficulty,
                    "quiz started"
                );
                Ok(question_count)
            }
            _ => Err(SessionError::NotIdle),
        }
    }

    /// Grade an answer for the current question.
    ///
    /// A correct answer moves on immediately when auto-advance is enabled;
    /// an incorrect one always waits for [`QuizSession::advance`].
    pub fn submit_answer(
        &mut self,
        raw: &str,
        at: DateTime<Utc>,
    ) -> Result<GradeOutcome, SessionError> {
        let correct_answer = self.expected_answer()?;
        let (index, record) = match self.state.apply(QuizEvent::Submit { raw, at })? {
            Transition::Graded { index, record } => (index, record),
            _ => return Err(SessionError::NotActive),
        };

        let feedback = if record.is_correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect { correct_answer }
        };

        let progress = if record.is_correct && self.config.auto_advance {
            self.advance(at)?
        } else {
            Progress::Stayed
        };

        Ok(GradeOutcome {
            index,
            record,
            feedback,
            progress,
        })
    }

    /// Record a timeout for the current question and move on.
    pub fn timeout(&mut self, at: DateTime<Utc>) -> Result<GradeOutcome, SessionError> {
        let correct_answer = self.expected_answer()?;
        let timer_seconds = self.config.timer_seconds;
        let (index, record) = match self.state.apply(QuizEvent::Timeout { timer_seconds })? {
            Transition::TimedOut { index, record } => (index, record),
            _ => return Err(SessionError::NotActive),
        };
        tracing::debug!(index, timer_seconds, "question timed out");

        let progress = self.advance(at)?;
        Ok(GradeOutcome {
            index,
            record,
            feedback: Feedback::TimedOut { correct_answer },
            progress,
        })
    }

    /// Move to the next question, or finish after the last one.
    pub fn advance(&mut self, at: DateTime<Utc>) -> Result<Progress, SessionError> {
        let transition = self.state.apply(QuizEvent::Advance { at })?;
        if let Some(summary) = self.summary() {
            tracing::info!(
                correct = summary.correct_count,
                total = summary.total_questions,
                accuracy = summary.accuracy_percent,
                "quiz finished"
            );
        }
        Ok(Progress::from(&transition))
    }

    /// Drop questions, answers and results and return to idle.
    pub fn reset(&mut self) {
        // Reset is accepted in every state.
        let _ = self.state.apply(QuizEvent::Reset);
    }

    /// Reset and start a fresh quiz with the same configuration.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        at: DateTime<Utc>,
    ) -> Result<usize, SessionError> {
        self.reset();
        self.start(rng, at)
    }

    fn expected_answer(&self) -> Result<f64, SessionError> {
        self.current_question()
            .map(|q| q.correct_answer)
            .ok_or(SessionError::NotActive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::generator::seeded_rng;
    use crate::model::{Difficulty, Operation};
    use chrono::{Duration, TimeZone};

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::seconds(secs)
    }

    fn easy_addition(count: u32, auto_advance: bool) -> QuizConfig {
        QuizConfig {
            operations: [Operation::Addition].into_iter().collect(),
            difficulty: Difficulty::Easy,
            question_count: count,
            auto_advance,
            ..QuizConfig::default()
        }
    }

    fn fixed_questions(answers: &[f64]) -> Vec<Question> {
        answers
            .iter()
            .map(|&a| Question {
                text: format!("{a} + 0"),
                correct_answer: a,
                operation: Operation::Addition,
                difficulty: Difficulty::Easy,
            })
            .collect()
    }

    fn answer_of(session: &QuizSession) -> String {
        session.current_question().unwrap().correct_answer.to_string()
    }

    #[test]
    fn end_to_end_three_questions() {
        let mut session = QuizSession::new(easy_addition(3, false));
        let count = session.start(&mut seeded_rng(11), t(0)).unwrap();
        assert_eq!(count, 3);
        assert_eq!(session.current_index(), Some(0));

        let answer = answer_of(&session);
        let outcome = session.submit_answer(&answer, t(2)).unwrap();
        assert_eq!(outcome.feedback, Feedback::Correct);
        assert_eq!(outcome.progress, Progress::Stayed);
        assert_eq!(session.current_index(), Some(0));
        assert!(session.active().unwrap().answer(0).is_some());

        assert_eq!(session.advance(t(3)).unwrap(), Progress::Advanced { index: 1 });
        assert_eq!(session.advance(t(4)).unwrap(), Progress::Advanced { index: 2 });
        assert_eq!(session.advance(t(5)).unwrap(), Progress::Finished);

        let summary = session.summary().unwrap();
        assert_eq!(summary.total_questions, 3);
        assert_eq!(summary.correct_count, 1);
        assert_eq!(summary.question_results[0].time_spent_seconds, 2.0);
        assert!(session.is_finished());
    }

    #[test]
    fn start_requires_operations() {
        let mut session = QuizSession::new(QuizConfig::default());
        let err = session.start(&mut seeded_rng(0), t(0)).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Quiz(QuizError::InvalidConfiguration(_))
        ));
        assert!(matches!(session.state(), QuizState::Idle));
    }

    #[test]
    fn start_requires_questions() {
        let mut session = QuizSession::new(easy_addition(3, false));
        assert!(session.start_with_questions(vec![], t(0)).is_err());
        assert!(!session.is_active());
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut session = QuizSession::new(easy_addition(2, false));
        session.start(&mut seeded_rng(1), t(0)).unwrap();
        assert_eq!(
            session.start(&mut seeded_rng(1), t(1)),
            Err(SessionError::NotIdle)
        );
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn invalid_input_changes_nothing() {
        let mut session = QuizSession::new(easy_addition(2, false));
        session.start_with_questions(fixed_questions(&[4.0, 5.0]), t(0)).unwrap();

        let err = session.submit_answer("  ", t(1)).unwrap_err();
        assert_eq!(err, SessionError::Invalid(ValidationError::Empty));
        let err = session.submit_answer("four", t(1)).unwrap_err();
        assert_eq!(err, SessionError::Invalid(ValidationError::NotANumber));
        assert!(!session.is_answered());

        let outcome = session.submit_answer("4", t(3)).unwrap();
        assert_eq!(outcome.record.time_spent_seconds, 3.0);
    }

    #[test]
    fn resubmission_is_rejected_until_advance() {
        let mut session = QuizSession::new(easy_addition(2, false));
        session.start_with_questions(fixed_questions(&[4.0, 5.0]), t(0)).unwrap();

        let first = session.submit_answer("3", t(1)).unwrap();
        assert_eq!(first.feedback, Feedback::Incorrect { correct_answer: 4.0 });
        assert_eq!(
            session.submit_answer("4", t(2)),
            Err(SessionError::AlreadyAnswered { index: 0 })
        );
        let record = session.active().unwrap().answer(0).unwrap();
        assert_eq!(record.submitted, Some(3.0));

        session.advance(t(3)).unwrap();
        assert!(session.submit_answer("5", t(4)).unwrap().feedback.is_correct());
    }

    #[test]
    fn auto_advance_only_after_correct_answers() {
        let mut session = QuizSession::new(easy_addition(3, true));
        session
            .start_with_questions(fixed_questions(&[1.0, 2.0, 3.0]), t(0))
            .unwrap();

        let outcome = session.submit_answer("1", t(1)).unwrap();
        assert_eq!(outcome.progress, Progress::Advanced { index: 1 });

        let outcome = session.submit_answer("7", t(2)).unwrap();
        assert_eq!(outcome.progress, Progress::Stayed);
        assert_eq!(session.current_index(), Some(1));

        session.advance(t(3)).unwrap();
        let outcome = session.submit_answer("3.004", t(4)).unwrap();
        assert_eq!(outcome.progress, Progress::Finished);
        assert_eq!(session.summary().unwrap().correct_count, 2);
    }

    #[test]
    fn timeout_records_and_advances() {
        let mut config = easy_addition(2, false);
        config.timer_enabled = true;
        config.timer_seconds = 15;
        let mut session = QuizSession::new(config);
        session.start_with_questions(fixed_questions(&[1.0, 2.0]), t(0)).unwrap();

        let outcome = session.timeout(t(15)).unwrap();
        assert_eq!(outcome.index, 0);
        assert_eq!(outcome.record, AnswerRecord::timed_out(15));
        assert_eq!(outcome.feedback, Feedback::TimedOut { correct_answer: 1.0 });
        assert_eq!(outcome.progress, Progress::Advanced { index: 1 });
    }

    #[test]
    fn timeout_on_last_question_finishes() {
        let mut session = QuizSession::new(easy_addition(1, false));
        session.start_with_questions(fixed_questions(&[9.0]), t(0)).unwrap();

        let outcome = session.timeout(t(30)).unwrap();
        assert_eq!(outcome.progress, Progress::Finished);
        let summary = session.summary().unwrap();
        assert_eq!(summary.unanswered_count, 1);
        assert_eq!(summary.question_results[0].time_spent_seconds, 30.0);
    }

    #[test]
    fn timeout_after_answer_is_rejected() {
        let mut session = QuizSession::new(easy_addition(2, false));
        session.start_with_questions(fixed_questions(&[1.0, 2.0]), t(0)).unwrap();
        session.submit_answer("1", t(1)).unwrap();
        assert_eq!(
            session.timeout(t(30)),
            Err(SessionError::AlreadyAnswered { index: 0 })
        );
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn transitions_need_an_active_quiz() {
        let mut session = QuizSession::new(easy_addition(2, false));
        assert_eq!(session.submit_answer("1", t(0)), Err(SessionError::NotActive));
        assert_eq!(session.timeout(t(0)), Err(SessionError::NotActive));
        assert_eq!(session.advance(t(0)), Err(SessionError::NotActive));
    }

    #[test]
    fn reset_from_finished_returns_to_idle() {
        let mut session = QuizSession::new(easy_addition(1, false));
        session.start_with_questions(fixed_questions(&[2.0]), t(0)).unwrap();
        session.advance(t(1)).unwrap();
        assert!(session.is_finished());

        session.reset();
        assert!(matches!(session.state(), QuizState::Idle));
        assert!(session.summary().is_none());
        assert!(session.current_question().is_none());
        assert_eq!(session.progress_percent(), 0.0);
    }

    #[test]
    fn restart_generates_a_new_quiz() {
        let mut session = QuizSession::new(easy_addition(4, false));
        session.start(&mut seeded_rng(1), t(0)).unwrap();
        session.advance(t(1)).unwrap();
        assert_eq!(session.restart(&mut seeded_rng(2), t(2)).unwrap(), 4);
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn config_is_locked_while_active() {
        let mut session = QuizSession::new(easy_addition(2, false));
        session.start(&mut seeded_rng(1), t(0)).unwrap();
        assert_eq!(
            session.set_config(QuizConfig::default()),
            Err(SessionError::InProgress)
        );
        session.reset();
        assert!(session.set_config(QuizConfig::default()).is_ok());
    }

    #[test]
    fn progress_and_index_only_move_forward() {
        let mut session = QuizSession::new(easy_addition(4, false));
        session
            .start_with_questions(fixed_questions(&[1.0, 2.0, 3.0, 4.0]), t(0))
            .unwrap();
        let mut last = -1.0;
        while session.is_active() {
            let progress = session.progress_percent();
            assert!(progress > last);
            last = progress;
            session.advance(t(1)).unwrap();
        }
        assert_eq!(session.progress_percent(), 100.0);
    }

    #[test]
    fn raw_state_machine_rejects_without_mutation() {
        let mut state = QuizState::default();
        assert_eq!(
            state.apply(QuizEvent::Advance { at: t(0) }),
            Err(SessionError::NotActive)
        );
        assert_eq!(state.name(), "idle");

        state
            .apply(QuizEvent::Start {
                questions: fixed_questions(&[3.0]),
                at: t(0),
            })
            .unwrap();
        assert_eq!(
            state.apply(QuizEvent::Submit { raw: "x", at: t(1) }),
            Err(SessionError::Invalid(ValidationError::NotANumber))
        );
        assert_eq!(
            state.apply(QuizEvent::Submit { raw: "3", at: t(1) }).unwrap(),
            Transition::Graded {
                index: 0,
                record: AnswerRecord::answered(3.0, true, 1.0)
            }
        );
        assert_eq!(
            state.apply(QuizEvent::Advance { at: t(2) }).unwrap(),
            Transition::Finished
        );
        assert_eq!(state.name(), "finished");
        assert_eq!(state.apply(QuizEvent::Reset).unwrap(), Transition::Reset);
        assert_eq!(state.name(), "idle");
    }

    #[test]
    fn feedback_messages() {
        assert_eq!(Feedback::Correct.message(), "Correct!");
        assert_eq!(
            Feedback::Incorrect { correct_answer: 12.5 }.message(),
            "Incorrect. The correct answer was 12.5"
        );
        assert_eq!(
            Feedback::TimedOut { correct_answer: 7.0 }.message(),
            "Time's up! The correct answer was 7"
        );
    }
}
