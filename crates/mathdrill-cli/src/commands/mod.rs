pub mod check;
pub mod config;
pub mod generate;
pub mod init;
pub mod play;
pub mod report;

use anyhow::Result;
use clap::Args;

use mathdrill_core::model::{
    parse_operations, Difficulty, QuizConfig, QUESTION_COUNT_RANGE, TIMER_SECONDS_RANGE,
};

/// Quiz settings that can be overridden on the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct QuizArgs {
    /// Operations, comma-separated (e.g. "add,sub,mul,div" or "+,×")
    #[arg(long)]
    pub ops: Option<String>,

    /// Difficulty: easy, medium, hard
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Number of questions (5-50)
    #[arg(long)]
    pub count: Option<u32>,

    /// Enable the per-question timer with this many seconds (5-60)
    #[arg(long, conflicts_with = "no_timer")]
    pub timer: Option<u32>,

    /// Disable the per-question timer
    #[arg(long)]
    pub no_timer: bool,

    /// Move on automatically after a correct answer
    #[arg(long, conflicts_with = "no_auto_advance")]
    pub auto_advance: bool,

    /// Wait for Enter after every answer
    #[arg(long)]
    pub no_auto_advance: bool,
}

impl QuizArgs {
    /// Apply the given flags on top of `config`. Returns whether anything
    /// changed.
    pub fn apply(&self, config: &mut QuizConfig) -> Result<bool> {
        let before = config.clone();

        if let Some(ops) = &self.ops {
            config.operations = parse_operations(ops)?;
        }
        if let Some(difficulty) = &self.difficulty {
            config.difficulty = difficulty
                .parse::<Difficulty>()
                .map_err(anyhow::Error::msg)?;
        }
        if let Some(count) = self.count {
            anyhow::ensure!(
                QUESTION_COUNT_RANGE.contains(&count),
                "question count must be between {} and {}",
                QUESTION_COUNT_RANGE.start(),
                QUESTION_COUNT_RANGE.end()
            );
            config.question_count = count;
        }
        if let Some(seconds) = self.timer {
            anyhow::ensure!(
                TIMER_SECONDS_RANGE.contains(&seconds),
                "timer must be between {} and {} seconds",
                TIMER_SECONDS_RANGE.start(),
                TIMER_SECONDS_RANGE.end()
            );
            config.timer_enabled = true;
            config.timer_seconds = seconds;
        }
        if self.no_timer {
            config.timer_enabled = false;
        }
        if self.auto_advance {
            config.auto_advance = true;
        }
        if self.no_auto_advance {
            config.auto_advance = false;
        }

        Ok(*config != before)
    }
}
