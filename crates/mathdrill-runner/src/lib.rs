//! mathdrill-runner — Async quiz driver.
//!
//! Owns one quiz session, reads answers from an [`AnswerSource`], runs the
//! per-question countdown, and reports progress to a [`QuizPresenter`].
//! Every session transition happens on the task that calls
//! [`QuizRunner::run`].

pub mod countdown;
pub mod input;

use anyhow::Result;
use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::mpsc;
use tokio::time::Instant;

use mathdrill_core::error::{SessionError, ValidationError};
use mathdrill_core::model::{Question, QuizConfig};
use mathdrill_core::session::{FinishedQuiz, GradeOutcome, Progress, QuizSession};
use mathdrill_core::statistics::ResultsSummary;

use crate::countdown::{spawn_countdown, CountdownHandle, TimerEvent};
pub use crate::input::{AnswerSource, LineInput, ScriptedInput};

/// Receives what the user should see while a quiz runs.
///
/// All methods default to doing nothing.
pub trait QuizPresenter: Send {
    /// A new question is on screen.
    fn question(&mut self, _index: usize, _total: usize, _question: &Question) {}

    /// Seconds left on the current question.
    fn tick(&mut self, _remaining: u32) {}

    /// The input could not be read as a number; the question stays open.
    fn invalid_input(&mut self, _error: &ValidationError) {}

    /// A question was graded or timed out.
    fn feedback(&mut self, _outcome: &GradeOutcome) {}

    /// The quiz is waiting for the user to continue.
    fn awaiting_continue(&mut self, _is_last: bool) {}

    fn finished(&mut self, _summary: &ResultsSummary) {}
}

/// A presenter that shows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPresenter;

impl QuizPresenter for NoopPresenter {}

enum Phase {
    Present,
    Answering,
    Reviewing,
}

/// Drives a [`QuizSession`] from user input and the countdown.
pub struct QuizRunner {
    session: QuizSession,
    epoch: (DateTime<Utc>, Instant),
}

impl QuizRunner {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            session: QuizSession::new(config),
            epoch: (Utc::now(), Instant::now()),
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Wall-clock time derived from the tokio clock, so that paused time in
    /// tests also pauses answer timing.
    pub fn now(&self) -> DateTime<Utc> {
        let elapsed = chrono::Duration::from_std(self.epoch.1.elapsed())
            .unwrap_or_else(|_| chrono::Duration::zero());
        self.epoch.0 + elapsed
    }

    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, SessionError> {
        let at = self.now();
        self.session.start(rng, at)
    }

    pub fn start_with_questions(&mut self, questions: Vec<Question>) -> Result<usize, SessionError> {
        let at = self.now();
        self.session.start_with_questions(questions, at)
    }

    /// Abandon the running quiz, if any.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Run the started quiz to completion.
    ///
    /// Returns the finished quiz, or `None` when input ended first, in
    /// which case the quiz is abandoned and the session is back to idle.
    pub async fn run(
        &mut self,
        input: &mut dyn AnswerSource,
        presenter: &mut dyn QuizPresenter,
    ) -> Result<Option<FinishedQuiz>> {
        if !self.session.is_active() {
            return Err(SessionError::NotActive.into());
        }

        let (tx, mut rx) = mpsc::unbounded_channel();
        let time_limit = {
            let config = self.session.config();
            config.timer_enabled.then_some(config.timer_seconds)
        };
        let mut countdown: Option<CountdownHandle> = None;
        let mut phase = Phase::Present;

        loop {
            let Some(quiz) = self.session.active() else {
                break;
            };
            let index = quiz.current_index();

            match phase {
                Phase::Present => {
                    presenter.question(index, quiz.questions().len(), quiz.current_question());
                    countdown = time_limit.map(|secs| spawn_countdown(index, secs, tx.clone()));
                    phase = Phase::Answering;
                }
                Phase::Answering => {
                    tokio::select! {
                        line = input.next_line() => {
                            let Some(raw) = line? else {
                                self.abandon(countdown.take());
                                return Ok(None);
                            };
                            let at = self.now();
                            match self.session.submit_answer(&raw, at) {
                                Ok(outcome) => {
                                    countdown = None;
                                    presenter.feedback(&outcome);
                                    phase = self.after_grade(&outcome, presenter);
                                }
                                Err(SessionError::Invalid(error)) => presenter.invalid_input(&error),
                                Err(e) => return Err(e.into()),
                            }
                        }
                        Some(event) = rx.recv() => match event {
                            TimerEvent::Tick { question, remaining } if question == index => {
                                presenter.tick(remaining);
                            }
                            TimerEvent::Expired { question } if question == index => {
                                countdown = None;
                                let at = self.now();
                                let outcome = self.session.timeout(at)?;
                                presenter.feedback(&outcome);
                                phase = Phase::Present;
                            }
                            stale => tracing::warn!(?stale, current = index, "ignoring stale timer event"),
                        },
                    }
                }
                Phase::Reviewing => {
                    if input.next_line().await?.is_none() {
                        self.abandon(countdown.take());
                        return Ok(None);
                    }
                    let at = self.now();
                    self.session.advance(at)?;
                    phase = Phase::Present;
                }
            }
        }

        drop(countdown);
        match self.session.finished() {
            Some(done) => {
                presenter.finished(done.summary());
                Ok(Some(done.clone()))
            }
            None => Err(SessionError::NotActive.into()),
        }
    }

    fn after_grade(&self, outcome: &GradeOutcome, presenter: &mut dyn QuizPresenter) -> Phase {
        match outcome.progress {
            Progress::Stayed => {
                let is_last = self.session.active().is_some_and(|q| q.is_last_question());
                presenter.awaiting_continue(is_last);
                Phase::Reviewing
            }
            Progress::Advanced { .. } | Progress::Finished => Phase::Present,
        }
    }

    fn abandon(&mut self, countdown: Option<CountdownHandle>) {
        if let Some(handle) = countdown {
            handle.cancel();
        }
        tracing::info!("input closed, abandoning quiz");
        self.session.reset();
    }
}
