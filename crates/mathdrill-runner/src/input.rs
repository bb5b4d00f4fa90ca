//! Sources of typed answers.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::time::Instant;

/// Where the runner reads answers from.
///
/// `next_line` must be cancel safe: the runner races it against the
/// countdown and drops the future when the timer wins, and no input may be
/// lost when that happens.
#[async_trait]
pub trait AnswerSource: Send {
    /// The next line the user entered, or `None` at end of input.
    async fn next_line(&mut self) -> Result<Option<String>>;
}

/// Reads one answer per line from an async reader such as stdin.
pub struct LineInput<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> AnswerSource for LineInput<R> {
    async fn next_line(&mut self) -> Result<Option<String>> {
        self.lines.next_line().await.context("failed to read input")
    }
}

/// Replays a fixed list of lines, each after a delay.
///
/// Delays run on the tokio clock, so paused-time tests control exactly when
/// each line arrives relative to the countdown.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    steps: VecDeque<(Duration, String)>,
    due: Option<Instant>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `line` to arrive `delay` after the previous one was read.
    pub fn then(mut self, delay: Duration, line: impl Into<String>) -> Self {
        self.steps.push_back((delay, line.into()));
        self
    }

    /// Queue `line` with no delay.
    pub fn line(self, line: impl Into<String>) -> Self {
        self.then(Duration::ZERO, line)
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

#[async_trait]
impl AnswerSource for ScriptedInput {
    async fn next_line(&mut self) -> Result<Option<String>> {
        let Some((delay, _)) = self.steps.front() else {
            return Ok(None);
        };
        // The deadline survives cancellation, so a dropped call resumes
        // waiting for the same instant.
        let due = *self.due.get_or_insert_with(|| Instant::now() + *delay);
        tokio::time::sleep_until(due).await;

        self.due = None;
        Ok(self.steps.pop_front().map(|(_, line)| line))
    }
}
