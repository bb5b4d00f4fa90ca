//! Per-question countdown task.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Events published by a running countdown, tagged with the question index
/// they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { question: usize, remaining: u32 },
    Expired { question: usize },
}

impl TimerEvent {
    pub fn question(&self) -> usize {
        match self {
            TimerEvent::Tick { question, .. } | TimerEvent::Expired { question } => *question,
        }
    }
}

/// A running countdown. Dropping the handle stops it.
#[derive(Debug)]
pub struct CountdownHandle {
    question: usize,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    pub fn question(&self) -> usize {
        self.question
    }

    /// Stop the countdown; no further events are sent.
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Count down `seconds` for `question`, one tick per second.
///
/// Sends `Tick` with the seconds left after each second, then a single
/// `Expired` when the count reaches zero. Stops early if the receiver is
/// gone.
pub fn spawn_countdown(
    question: usize,
    seconds: u32,
    events: UnboundedSender<TimerEvent>,
) -> CountdownHandle {
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // The first tick completes immediately.
        interval.tick().await;

        for remaining in (0..seconds).rev() {
            interval.tick().await;
            let event = if remaining == 0 {
                TimerEvent::Expired { question }
            } else {
                TimerEvent::Tick {
                    question,
                    remaining,
                }
            };
            if events.send(event).is_err() {
                return;
            }
        }
        tracing::trace!(question, "countdown expired");
    });

    CountdownHandle { question, task }
}
