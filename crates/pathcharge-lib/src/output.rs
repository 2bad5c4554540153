use std::fmt::Write;

use crate::feasibility::FeasibilityReport;

/// Presentation style for turning a [`FeasibilityReport`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Two-line diagnostic: verdict headline followed by the figures.
    PlainText,
    /// Single-line verdict for logs and scripts.
    Summary,
}

impl FeasibilityReport {
    /// Headline describing the verdict.
    pub fn verdict_label(&self) -> &'static str {
        if self.feasible {
            "Enough battery resources to complete the path"
        } else {
            "Warning: There are not enough battery resources to complete the path"
        }
    }

    /// Render the report using the requested [`RenderMode`].
    pub fn render_with(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::Summary => self.render_summary(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.verdict_label());
        if self.feasible {
            let _ = writeln!(
                buffer,
                "length: {:.4}[m], actual level: {:.4}, expected level after travel: {:.4}",
                self.path_length, self.battery_level, self.projected_level
            );
        } else {
            let _ = writeln!(
                buffer,
                "path length: {:.4}[m], actual battery level: {:.4}, expected level after travel: {:.4}",
                self.path_length, self.battery_level, self.projected_level
            );
        }
        buffer
    }

    fn render_summary(&self) -> String {
        let verdict = if self.feasible {
            "FEASIBLE"
        } else {
            "INFEASIBLE"
        };
        format!(
            "{verdict}: {:.3}m over {}/{} segments, battery {:.2}% -> {:.2}%\n",
            self.path_length,
            self.segments_evaluated,
            self.total_segments,
            self.battery_level,
            self.projected_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(feasible: bool) -> FeasibilityReport {
        FeasibilityReport {
            feasible,
            path_length: 12.5,
            battery_level: 90.0,
            projected_level: 89.25,
            segments_evaluated: 3,
            total_segments: 4,
        }
    }

    #[test]
    fn plain_text_for_feasible_report() {
        let text = report(true).render_with(RenderMode::PlainText);
        assert_eq!(
            text,
            "Enough battery resources to complete the path\n\
             length: 12.5000[m], actual level: 90.0000, expected level after travel: 89.2500\n"
        );
    }

    #[test]
    fn plain_text_for_infeasible_report() {
        let text = report(false).render_with(RenderMode::PlainText);
        assert!(text.starts_with("Warning: There are not enough battery resources"));
        assert!(text.contains("path length: 12.5000[m]"));
        assert!(text.contains("actual battery level: 90.0000"));
    }

    #[test]
    fn summary_is_single_line() {
        let text = report(false).render_with(RenderMode::Summary);
        assert_eq!(
            text,
            "INFEASIBLE: 12.500m over 3/4 segments, battery 90.00% -> 89.25%\n"
        );
    }
}
