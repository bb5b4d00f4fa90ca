//! Plain-text and markdown summaries, plus the shared formatting helpers.

use std::fmt;

use comfy_table::{Cell, Color, Table};

use mathdrill_core::model::QuizConfig;
use mathdrill_core::report::SessionReport;

/// Format a duration in seconds: `"12.3s"` below a minute, `"2m 5s"` above.
pub fn format_time(seconds: f64) -> String {
    if seconds < 60.0 {
        return format!("{seconds:.1}s");
    }
    let minutes = (seconds / 60.0).floor();
    let rest = seconds - minutes * 60.0;
    format!("{minutes:.0}m {rest:.0}s")
}

/// A submitted answer for display, `"No answer"` for timeouts.
pub fn format_answer(answer: Option<f64>) -> String {
    match answer {
        Some(value) => value.to_string(),
        None => "No answer".to_string(),
    }
}

/// Encouragement message tier for a final accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Excellent,
    Great,
    Good,
    KeepPracticing,
    NeedsPractice,
}

impl PerformanceTier {
    pub fn from_accuracy(accuracy_percent: f64) -> Self {
        if accuracy_percent >= 90.0 {
            PerformanceTier::Excellent
        } else if accuracy_percent >= 80.0 {
            PerformanceTier::Great
        } else if accuracy_percent >= 60.0 {
            PerformanceTier::Good
        } else if accuracy_percent >= 40.0 {
            PerformanceTier::KeepPracticing
        } else {
            PerformanceTier::NeedsPractice
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent!",
            PerformanceTier::Great => "Great job!",
            PerformanceTier::Good => "Good work!",
            PerformanceTier::KeepPracticing => "Keep practicing!",
            PerformanceTier::NeedsPractice => "More practice needed!",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Colour band for highlighting an accuracy figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyBand {
    Success,
    Warning,
    Error,
}

impl AccuracyBand {
    pub fn from_accuracy(accuracy_percent: f64) -> Self {
        if accuracy_percent >= 80.0 {
            AccuracyBand::Success
        } else if accuracy_percent >= 60.0 {
            AccuracyBand::Warning
        } else {
            AccuracyBand::Error
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AccuracyBand::Success => "success",
            AccuracyBand::Warning => "warning",
            AccuracyBand::Error => "error",
        }
    }

    fn terminal_color(&self) -> Color {
        match self {
            AccuracyBand::Success => Color::Green,
            AccuracyBand::Warning => Color::Yellow,
            AccuracyBand::Error => Color::Red,
        }
    }
}

/// One-line description of the settings a quiz ran with.
pub fn settings_line(config: &QuizConfig) -> String {
    let difficulty = config.difficulty.to_string();
    let mut parts = vec![capitalize(&difficulty)];
    let ops: Vec<String> = config.operations.iter().map(|op| op.to_string()).collect();
    if !ops.is_empty() {
        parts.push(ops.join(", "));
    }
    if config.timer_enabled {
        parts.push(format!("{}s timer", config.timer_seconds));
    }
    if config.auto_advance {
        parts.push("auto-advance".to_string());
    }
    parts.join(" | ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a report for the terminal.
pub fn render_text(report: &SessionReport) -> String {
    let summary = &report.summary;
    let band = AccuracyBand::from_accuracy(summary.accuracy_percent);
    let mut out = String::new();

    out.push_str("Quiz Complete!\n\n");

    let mut stats = Table::new();
    stats.set_header(vec!["Total Questions", "Correct Answers", "Accuracy", "Avg. Time"]);
    stats.add_row(vec![
        Cell::new(summary.total_questions),
        Cell::new(summary.correct_count),
        Cell::new(format!("{:.1}%", summary.accuracy_percent)).fg(band.terminal_color()),
        Cell::new(format_time(summary.average_time_seconds)),
    ]);
    out.push_str(&format!("{stats}\n\n"));

    out.push_str(&format!(
        "{}\nYou answered {} out of {} questions correctly.\n",
        PerformanceTier::from_accuracy(summary.accuracy_percent),
        summary.correct_count,
        summary.total_questions
    ));
    out.push_str(&format!("Settings: {}\n\n", settings_line(&report.config)));

    let mut details = Table::new();
    details.set_header(vec!["#", "Question", "Your answer", "Correct", "Time", ""]);
    for (i, r) in summary.question_results.iter().enumerate() {
        let mark = if r.is_correct {
            Cell::new("OK").fg(Color::Green)
        } else {
            Cell::new("X").fg(Color::Red)
        };
        details.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&r.question.text),
            Cell::new(format_answer(r.user_answer)),
            Cell::new(r.correct_answer),
            Cell::new(format_time(r.time_spent_seconds)),
            mark,
        ]);
    }
    out.push_str(&format!("{details}\n"));

    if summary.per_operation.len() > 1 {
        let mut ops = Table::new();
        ops.set_header(vec!["Operation", "Correct", "Accuracy"]);
        for (op, stats) in &summary.per_operation {
            ops.add_row(vec![
                Cell::new(op.label()),
                Cell::new(format!("{}/{}", stats.correct, stats.total)),
                Cell::new(format!("{:.1}%", stats.accuracy_percent)),
            ]);
        }
        out.push_str(&format!("\n{ops}\n"));
    }

    out
}

/// Render a report as markdown.
pub fn to_markdown(report: &SessionReport) -> String {
    let summary = &report.summary;
    let mut md = String::new();

    md.push_str("# Quiz results\n\n");
    md.push_str(&format!(
        "**{}** {} of {} correct ({:.1}%), average time {}.\n\n",
        PerformanceTier::from_accuracy(summary.accuracy_percent),
        summary.correct_count,
        summary.total_questions,
        summary.accuracy_percent,
        format_time(summary.average_time_seconds)
    ));
    md.push_str(&format!(
        "_{} | {}_\n\n",
        settings_line(&report.config),
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str("| # | Question | Your answer | Correct | Time | Result |\n");
    md.push_str("|---|----------|-------------|---------|------|--------|\n");
    for (i, r) in summary.question_results.iter().enumerate() {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            i + 1,
            r.question.text,
            format_answer(r.user_answer),
            r.correct_answer,
            format_time(r.time_spent_seconds),
            if r.is_correct { "correct" } else { "wrong" }
        ));
    }

    if !summary.per_operation.is_empty() {
        md.push_str("\n### By operation\n\n");
        md.push_str("| Operation | Correct | Accuracy |\n");
        md.push_str("|-----------|---------|----------|\n");
        for (op, stats) in &summary.per_operation {
            md.push_str(&format!(
                "| {} | {}/{} | {:.1}% |\n",
                op.label(),
                stats.correct,
                stats.total,
                stats.accuracy_percent
            ));
        }
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_report;

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(0.0), "0.0s");
        assert_eq!(format_time(12.34), "12.3s");
        assert_eq!(format_time(59.9), "59.9s");
        assert_eq!(format_time(60.0), "1m 0s");
        assert_eq!(format_time(125.0), "2m 5s");
    }

    #[test]
    fn tier_thresholds() {
        let cases = [
            (100.0, "Excellent!"),
            (90.0, "Excellent!"),
            (89.9, "Great job!"),
            (80.0, "Great job!"),
            (60.0, "Good work!"),
            (40.0, "Keep practicing!"),
            (39.9, "More practice needed!"),
            (0.0, "More practice needed!"),
        ];
        for (accuracy, message) in cases {
            assert_eq!(PerformanceTier::from_accuracy(accuracy).message(), message);
        }
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(AccuracyBand::from_accuracy(80.0), AccuracyBand::Success);
        assert_eq!(AccuracyBand::from_accuracy(79.0), AccuracyBand::Warning);
        assert_eq!(AccuracyBand::from_accuracy(60.0), AccuracyBand::Warning);
        assert_eq!(AccuracyBand::from_accuracy(59.9).css_class(), "error");
    }

    #[test]
    fn settings_description() {
        let report = sample_report();
        assert_eq!(
            settings_line(&report.config),
            "Easy | addition, multiplication | 15s timer"
        );
    }

    #[test]
    fn text_output() {
        let text = render_text(&sample_report());
        assert!(text.contains("Quiz Complete!"));
        assert!(text.contains("More practice needed!"));
        assert!(text.contains("You answered 1 out of 3 questions correctly."));
        assert!(text.contains("No answer"));
        assert!(text.contains("6 × 7"));
    }

    #[test]
    fn markdown_output() {
        let md = to_markdown(&sample_report());
        assert!(md.contains("| 2 | 6 × 7 | 41 | 42 | 4.0s | wrong |"));
        assert!(md.contains("| 3 | 8 + 1 | No answer | 9 | 15.0s | wrong |"));
        assert!(md.contains("| Multiplication | 0/1 | 0.0% |"));
    }
}
