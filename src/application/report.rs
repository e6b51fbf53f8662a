//! Plain-text rendering of progress and final reports.

use colored::Colorize;

use crate::application::SearchOutcome;
use crate::domain::Candidate;

pub const BANNER: &str = "=== Fermat Near Miss Program ===";
pub const NEW_BEST_HEADER: &str = "New best near miss:";
pub const FINAL_HEADER: &str = "=== Final Best Near Miss ===";
pub const EXIT_PROMPT: &str = "Press ENTER to exit...";
pub const EXPONENT_PROMPT: &str = "Enter n (3-11): ";
pub const BOUND_PROMPT: &str = "Enter k (>10): ";

/// Presentation knobs shared by progress and final blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportFormat {
    /// Fractional digits of the relative miss
    pub precision: usize,
    pub show_percentage: bool,
    /// Colorize headers (terminal output only)
    pub color: bool,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            precision: 10,
            show_percentage: true,
            color: false,
        }
    }
}

impl ReportFormat {
    pub fn header(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn relative_miss(&self, candidate: &Candidate) -> String {
        let mut out = format!("{:.*}", self.precision, candidate.relative_miss);
        if self.show_percentage {
            out.push_str(&format!(
                " ({:.*}%)",
                self.precision,
                candidate.relative_miss_percent()
            ));
        }
        out
    }
}

/// The field lines of a candidate block, without indentation.
pub fn candidate_lines(candidate: &Candidate, format: &ReportFormat) -> Vec<String> {
    vec![
        format!(
            "n={}, x={}, y={}, z={}",
            candidate.exponent, candidate.x, candidate.y, candidate.z
        ),
        format!("S = x^n + y^n = {}", candidate.sum),
        format!("absolute miss = {}", candidate.absolute_miss),
        format!("relative miss = {}", format.relative_miss(candidate)),
    ]
}

fn block(header: &str, candidate: &Candidate, format: &ReportFormat) -> String {
    let mut out = format.header(header);
    out.push('\n');
    for line in candidate_lines(candidate, format) {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Block printed whenever the scan finds a strictly closer candidate.
pub fn progress_block(candidate: &Candidate, format: &ReportFormat) -> String {
    let mut out = block(NEW_BEST_HEADER, candidate, format);
    out.push('\n');
    out
}

/// Block printed once after the scan completes.
pub fn final_block(outcome: &SearchOutcome, format: &ReportFormat) -> String {
    let mut out = block(FINAL_HEADER, &outcome.best, format);
    out.push_str(&format!(
        "  pairs evaluated = {}, improvements = {}\n",
        outcome.pairs_evaluated, outcome.improvements
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{evaluate, RootMethod};

    #[test]
    fn given_hand_computed_candidate_when_rendering_then_matches_layout() {
        let candidate = evaluate(10, 10, 3, RootMethod::Float);
        let rendered = progress_block(&candidate, &ReportFormat::default());
        assert_eq!(
            rendered,
            "New best near miss:\n  n=3, x=10, y=10, z=12\n  S = x^n + y^n = 2000\n  absolute miss = 197\n  relative miss = 0.0985000000 (9.8500000000%)\n\n"
        );
    }

    #[test]
    fn given_precision_without_percentage_when_rendering_then_fixed_digits_only() {
        let candidate = evaluate(10, 10, 3, RootMethod::Float);
        let format = ReportFormat {
            precision: 12,
            show_percentage: false,
            color: false,
        };
        assert_eq!(format.relative_miss(&candidate), "0.098500000000");
    }
}
