//! Plain-text grade distribution chart.

use gradebook_core::statistics::GradeDistribution;

/// Width in characters of the longest bar.
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Render the distribution as one horizontal bar per grade, A through F.
///
/// ```text
/// A | ######## 2
/// B |  0
/// ```
pub fn render_distribution(dist: &GradeDistribution, bar_width: usize) -> String {
    let max = dist.max_count();
    let mut out = String::new();

    for (grade, count) in dist.counts() {
        let len = if max == 0 {
            0
        } else {
            // Round up so any non-zero bucket gets at least one mark.
            (count * bar_width).div_ceil(max)
        };
        out.push_str(&format!("{grade} | {} {count}\n", "#".repeat(len)));
    }

    out
}
