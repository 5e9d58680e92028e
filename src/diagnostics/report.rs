//! Diagnostic report and text rendering.
//!
//! [`render`] is a pure projection of a [`Report`] to lines of text. The
//! framing markers it emits are informational and say nothing about whether
//! the probes passed.

use std::fmt;

use super::outcome::{Outcome, ProbeName, Status};

/// Leading marker text.
pub const STARTING_MARKER: &str = "diagnostics starting";
/// Trailing marker text.
pub const COMPLETE_MARKER: &str = "diagnostics complete";

/// The ordered outcomes of one diagnostics run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self { outcomes }
    }

    /// Outcomes in execution order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// The outcome produced by `probe`, if it ran.
    pub fn get(&self, probe: ProbeName) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.probe() == probe)
    }

    /// The worst status in the report, or `Success` if it is empty.
    pub fn verdict(&self) -> Status {
        self.outcomes
            .iter()
            .map(|o| o.status())
            .max_by_key(|s| s.severity())
            .unwrap_or(Status::Success)
    }
}

/// Kind of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Start/complete framing.
    Marker,
    /// A successful probe.
    Ok,
    /// A probe with any non-success status.
    Error,
    /// Overall verdict (strict mode only).
    Summary,
}

impl LineKind {
    pub fn tag(&self) -> &'static str {
        match self {
            LineKind::Marker => "INFO",
            LineKind::Ok => "OK",
            LineKind::Error => "ERROR",
            LineKind::Summary => "SUMMARY",
        }
    }
}

/// One rendered line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

impl ReportLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.tag(), self.text)
    }
}

/// Render a report as framed, tagged lines, one per outcome.
pub fn render(report: &Report) -> Vec<ReportLine> {
    let mut lines = Vec::with_capacity(report.outcomes().len() + 2);
    lines.push(ReportLine::new(LineKind::Marker, STARTING_MARKER));
    lines.extend(report.outcomes().iter().map(render_outcome));
    lines.push(ReportLine::new(LineKind::Marker, COMPLETE_MARKER));
    lines
}

/// Render a report with an overall verdict line before the closing marker.
pub fn render_with_verdict(report: &Report) -> Vec<ReportLine> {
    let mut lines = render(report);
    let summary = ReportLine::new(LineKind::Summary, format!("overall {}", report.verdict()));
    lines.insert(lines.len() - 1, summary);
    lines
}

fn render_outcome(outcome: &Outcome) -> ReportLine {
    let kind = if outcome.is_success() {
        LineKind::Ok
    } else {
        LineKind::Error
    };

    let mut text = format!("{} {}", outcome.probe(), outcome.status());
    if let Some(detail) = outcome.detail() {
        text.push_str(": ");
        text.push_str(detail);
    }
    if !outcome.metrics().is_empty() {
        let metrics: Vec<String> = outcome
            .metrics()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        text.push_str(&format!(" ({})", metrics.join(", ")));
    }

    ReportLine::new(kind, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::outcome::{ACCELERATOR_COUNT, FRAME_HEIGHT, FRAME_WIDTH};

    fn sample_report() -> Report {
        Report::new(vec![
            Outcome::success(ProbeName::Runtime)
                .with_detail("candle-core 0.9")
                .with_metric(ACCELERATOR_COUNT, 1usize),
            Outcome::new(ProbeName::Artifact, Status::NotFound).with_detail("/m/model.mdl"),
            Outcome::success(ProbeName::Device)
                .with_metric(FRAME_WIDTH, 640u32)
                .with_metric(FRAME_HEIGHT, 480u32),
        ])
    }

    #[test]
    fn render_frames_outcomes_with_markers() {
        let lines: Vec<String> = render(&sample_report())
            .iter()
            .map(|l| l.to_string())
            .collect();

        assert_eq!(
            lines,
            vec![
                "[INFO] diagnostics starting",
                "[OK] runtime SUCCESS: candle-core 0.9 (accelerator_count=1)",
                "[ERROR] artifact NOT_FOUND: /m/model.mdl",
                "[OK] device SUCCESS (frame_height=480, frame_width=640)",
                "[INFO] diagnostics complete",
            ]
        );
    }

    #[test]
    fn render_has_no_verdict_line() {
        let lines = render(&sample_report());
        assert!(!lines.iter().any(|l| l.kind == LineKind::Summary));
    }

    #[test]
    fn render_with_verdict_inserts_summary_before_closing_marker() {
        let lines = render_with_verdict(&sample_report());

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4].to_string(), "[SUMMARY] overall NOT_FOUND");
        assert_eq!(lines[5].text, COMPLETE_MARKER);
    }

    #[test]
    fn non_success_statuses_render_as_errors() {
        for status in [Status::Unavailable, Status::NotFound, Status::Failed] {
            let report = Report::new(vec![Outcome::new(ProbeName::Runtime, status)]);
            let lines = render(&report);
            assert_eq!(lines[1].kind, LineKind::Error);
        }
    }

    #[test]
    fn verdict_is_worst_status() {
        assert_eq!(sample_report().verdict(), Status::NotFound);

        let all_ok = Report::new(vec![
            Outcome::success(ProbeName::Runtime),
            Outcome::success(ProbeName::Artifact),
        ]);
        assert_eq!(all_ok.verdict(), Status::Success);

        let failed = Report::new(vec![
            Outcome::new(ProbeName::Runtime, Status::Unavailable),
            Outcome::failed(ProbeName::Device, "no frame"),
        ]);
        assert_eq!(failed.verdict(), Status::Failed);
    }

    #[test]
    fn empty_report_still_framed() {
        let report = Report::new(Vec::new());
        let lines = render(&report);
        assert_eq!(lines.len(), 2);
        assert_eq!(report.verdict(), Status::Success);
    }

    #[test]
    fn get_finds_outcome_by_probe() {
        let report = sample_report();
        assert_eq!(
            report.get(ProbeName::Artifact).unwrap().status(),
            Status::NotFound
        );
    }
}
