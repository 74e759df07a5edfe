//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined and the grade
//! distribution drawn as an SVG bar chart.

use anyhow::Result;
use std::path::Path;

use gradebook_core::model::Grade;
use gradebook_core::report::GradeReport;
use gradebook_core::statistics::{GradeDistribution, NO_DATA_MESSAGE};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML report.
pub fn generate_html(report: &GradeReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Student Grades</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Student Grades</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} | {} students | {}</p>\n",
        html_escape(&report.data_file.display().to_string()),
        report.records.len(),
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Stats and chart
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Statistics</h2>\n");
    let stats_line = match &report.stats {
        Some(stats) => stats.to_string(),
        None => NO_DATA_MESSAGE.to_string(),
    };
    html.push_str(&format!(
        "<p class=\"stats\">{}</p>\n",
        html_escape(&stats_line)
    ));
    html.push_str("<h2>Grade Distribution</h2>\n");
    html.push_str(&generate_bar_chart(&report.distribution));
    html.push_str("</section>\n");

    // Graded rows
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Students</h2>\n");
    html.push_str("<table class=\"results-table\">\n");
    html.push_str(
        "<thead><tr><th>Student Name</th><th>Score</th><th>Grade</th></tr></thead>\n",
    );
    html.push_str("<tbody>\n");
    for r in &report.records {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"grade-{}\">{}</td></tr>\n",
            html_escape(&r.name),
            html_escape(&r.score_text),
            html_escape(&r.grade),
            html_escape(&r.grade)
        ));
    }
    html.push_str("</tbody></table>\n");

    if !report.rejected.is_empty() {
        html.push_str("<h2>Skipped Rows</h2>\n");
        html.push_str("<table class=\"results-table\">\n");
        html.push_str("<thead><tr><th>Row</th><th>Student Name</th><th>Score</th><th>Problem</th></tr></thead>\n");
        html.push_str("<tbody>\n");
        for r in &report.rejected {
            html.push_str(&format!(
                "<tr class=\"invalid\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                r.index + 1,
                html_escape(&r.record.name),
                html_escape(&r.record.score_text),
                html_escape(&r.issue.to_string())
            ));
        }
        html.push_str("</tbody></table>\n");
    }
    html.push_str("</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &GradeReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

/// Vertical bar chart, one bar per grade, letter on the x axis and student
/// count on the y axis.
fn generate_bar_chart(dist: &GradeDistribution) -> String {
    let bar_width: usize = 60;
    let gap: usize = 30;
    let max_height: usize = 240;
    let axis_left: usize = 50;
    let top: usize = 20;
    let bottom: usize = 50;

    let max = dist.max_count().max(1);
    let chart_width = axis_left + Grade::ALL.len() * (bar_width + gap) + gap;
    let baseline = top + max_height;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" role=\"img\" aria-label=\"Grade Distribution\">\n",
        chart_width,
        baseline + bottom
    );

    svg.push_str(&format!(
        "  <line x1=\"{axis_left}\" y1=\"{top}\" x2=\"{axis_left}\" y2=\"{baseline}\" stroke=\"currentColor\"/>\n"
    ));
    svg.push_str(&format!(
        "  <line x1=\"{axis_left}\" y1=\"{baseline}\" x2=\"{chart_width}\" y2=\"{baseline}\" stroke=\"currentColor\"/>\n"
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
        axis_left - 6,
        top,
        max
    ));

    for (i, (grade, count)) in dist.counts().enumerate() {
        let x = axis_left + gap + i * (bar_width + gap);
        let height = count * max_height / max;
        let y = baseline - height;

        svg.push_str(&format!(
            "  <rect x=\"{x}\" y=\"{y}\" width=\"{bar_width}\" height=\"{height}\" fill=\"#87ceeb\" rx=\"2\"><title>{grade}: {count}</title></rect>\n"
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" text-anchor=\"middle\">{}</text>\n",
            x + bar_width / 2,
            y.saturating_sub(6).max(top),
            count
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"middle\">{}</text>\n",
            x + bar_width / 2,
            baseline + 20,
            grade
        ));
    }

    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-size=\"13\" fill=\"currentColor\" text-anchor=\"middle\">Letter Grade</text>\n",
        chart_width / 2,
        baseline + 42
    ));
    svg.push_str(&format!(
        "  <text x=\"14\" y=\"{}\" font-size=\"13\" fill=\"currentColor\" text-anchor=\"middle\" transform=\"rotate(-90 14 {})\">Number of Students</text>\n",
        top + max_height / 2,
        top + max_height / 2
    ));

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.stats { font-size: 1.1rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.invalid { background: var(--fail); }
.grade-A, .grade-B, .grade-C, .grade-D, .grade-F { font-weight: 600; text-align: center; }
.grade-A { color: #15803d; }
.grade-B { color: #4d7c0f; }
.grade-C { color: #a16207; }
.grade-D { color: #c2410c; }
.grade-F { color: #b91c1c; background: var(--fail); }
svg { margin: 1rem 0; }
"#;
