//! Standalone HTML results page.

use mathdrill_core::report::SessionReport;
use mathdrill_core::statistics::ResultsSummary;

use crate::text::{format_answer, format_time, settings_line, AccuracyBand, PerformanceTier};

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a session report.
pub fn generate_html(report: &SessionReport) -> String {
    let summary = &report.summary;
    let band = AccuracyBand::from_accuracy(summary.accuracy_percent);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>mathdrill results {}</title>\n",
        report.created_at.format("%Y-%m-%d %H:%M")
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Quiz Complete!</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} | {}</p>\n",
        html_escape(&settings_line(&report.config)),
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary cards
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str(&card(&summary.total_questions.to_string(), "Total Questions", ""));
    html.push_str(&card(&summary.correct_count.to_string(), "Correct Answers", "success"));
    html.push_str(&card(
        &format!("{:.1}%", summary.accuracy_percent),
        "Accuracy",
        band.css_class(),
    ));
    html.push_str(&card(&format_time(summary.average_time_seconds), "Avg. Time", "info"));
    html.push_str("</section>\n");

    html.push_str(&format!(
        "<section class=\"message\">\n<h2 class=\"{}\">{}</h2>\n<p>You answered {} out of {} questions correctly.</p>\n</section>\n",
        band.css_class(),
        PerformanceTier::from_accuracy(summary.accuracy_percent),
        summary.correct_count,
        summary.total_questions
    ));

    if !summary.per_operation.is_empty() {
        html.push_str(&generate_bar_chart(summary));
    }

    // Per-question results
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Question Details</h2>\n");
    html.push_str("<label class=\"toggle\"><input type=\"checkbox\" id=\"missed-only\"> Show missed questions only</label>\n");
    html.push_str("<table class=\"results-table\" id=\"results\">\n");
    html.push_str("<thead><tr><th>#</th><th>Question</th><th>Your answer</th><th>Correct</th><th>Time</th></tr></thead>\n");
    html.push_str("<tbody>\n");

    for (i, r) in summary.question_results.iter().enumerate() {
        let class = if r.is_correct { "pass" } else { "fail" };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            class,
            i + 1,
            html_escape(&r.question.text),
            format_answer(r.user_answer),
            r.correct_answer,
            format_time(r.time_spent_seconds)
        ));
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

fn card(value: &str, label: &str, class: &str) -> String {
    format!(
        "<div class=\"card\"><div class=\"value {class}\">{}</div><div class=\"label\">{}</div></div>\n",
        html_escape(value),
        html_escape(label)
    )
}

/// Horizontal bars of accuracy per operation.
fn generate_bar_chart(summary: &ResultsSummary) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 160;

    let total_height = summary.per_operation.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (op, stats)) in summary.per_operation.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let score = stats.accuracy_percent / 100.0;
        let width = (score * max_width as f64) as usize;

        let color = match AccuracyBand::from_accuracy(stats.accuracy_percent) {
            AccuracyBand::Success => "#22c55e",
            AccuracyBand::Warning => "#eab308",
            AccuracyBand::Error => "#ef4444",
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{} ({})</text>\n",
            label_width - 10,
            y + bar_height / 2,
            op.label(),
            op.symbol()
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}/{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            stats.correct,
            stats.total
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --paper: #f8fafc; --ink: #0f172a; --muted: #64748b; --line: #cbd5e1; --right: #ecfdf5; --wrong: #fef2f2; }
@media (prefers-color-scheme: dark) {
  :root { --paper: #0f172a; --ink: #e2e8f0; --muted: #94a3b8; --line: #334155; --right: #052e16; --wrong: #450a0a; }
}
body { font-family: system-ui, sans-serif; max-width: 56rem; margin: 0 auto; padding: 1.5rem; background: var(--paper); color: var(--ink); }
header h1 { margin-bottom: 0.25rem; }
.meta { color: var(--muted); margin-top: 0; }
.dashboard { display: grid; grid-template-columns: repeat(auto-fit, minmax(9rem, 1fr)); gap: 0.75rem; margin: 1.5rem 0; }
.card { border: 1px solid var(--line); border-radius: 0.75rem; padding: 0.75rem; text-align: center; }
.card .value { font-size: 1.75rem; font-weight: 700; }
.card .label { color: var(--muted); font-size: 0.85rem; }
.success { color: #059669; }
.warning { color: #d97706; }
.error { color: #dc2626; }
.info { color: #2563eb; }
.message { text-align: center; margin: 1.5rem 0; }
.results-table { border-collapse: collapse; width: 100%; }
.results-table th, .results-table td { border-bottom: 1px solid var(--line); padding: 0.4rem 0.75rem; text-align: left; }
.results-table tr.pass { background: var(--right); }
.results-table tr.fail { background: var(--wrong); }
.results-table.missed-only tr.pass { display: none; }
label.toggle { display: inline-block; margin-bottom: 0.5rem; color: var(--muted); }
pre { overflow-x: auto; padding: 0.75rem; border: 1px solid var(--line); border-radius: 0.5rem; font-size: 0.8rem; }
details summary { cursor: pointer; }
"#;

const JS: &str = r#"
document.getElementById('missed-only').addEventListener('change', function (e) {
  document.getElementById('results').classList.toggle('missed-only', e.target.checked);
});
"#;
