use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::expect::Expectation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    pub id: String,
    pub timestamp: String,
    pub seed: u64,
    pub summary: ReportSummary,
    pub checks: Vec<Expectation>,
}

impl GradeReport {
    pub fn new(id: impl Into<String>, seed: u64, checks: Vec<Expectation>) -> Self {
        Self {
            id: id.into(),
            timestamp: Utc::now().to_rfc3339(),
            seed,
            summary: summarize_checks(&checks),
            checks,
        }
    }

    /// One rendered line per check, in evaluation order.
    pub fn lines(&self) -> Vec<String> {
        self.checks.iter().map(ToString::to_string).collect()
    }

    pub fn passed(&self) -> bool {
        self.summary.status == ReportStatus::Pass
    }
}

fn summarize_checks(checks: &[Expectation]) -> ReportSummary {
    let passed = checks.iter().filter(|c| c.passed).count();
    let failed = checks.len() - passed;
    let score = if checks.is_empty() {
        1.0
    } else {
        passed as f32 / checks.len() as f32
    };
    let status = if failed == 0 {
        ReportStatus::Pass
    } else {
        ReportStatus::Fail
    };
    ReportSummary {
        status,
        passed,
        failed,
        score,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub status: ReportStatus,
    pub passed: usize,
    pub failed: usize,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pass,
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_passing_scores_one() {
        let report = GradeReport::new(
            "run-1",
            42,
            vec![Expectation::check(true, "a"), Expectation::check(true, "b")],
        );
        assert!(report.passed());
        assert_eq!(2, report.summary.passed);
        assert_eq!(1.0, report.summary.score);
        assert_eq!(vec!["a 👍", "b 👍"], report.lines());
    }

    #[test]
    fn one_failure_fails_the_run() {
        let report = GradeReport::new(
            "run-2",
            42,
            vec![
                Expectation::check(true, "a"),
                Expectation::check(false, "b"),
                Expectation::check(true, "c"),
                Expectation::check(true, "d"),
            ],
        );
        assert_eq!(ReportStatus::Fail, report.summary.status);
        assert_eq!(1, report.summary.failed);
        assert_eq!(0.75, report.summary.score);
    }

    #[test]
    fn empty_battery_passes() {
        let report = GradeReport::new("run-3", 0, Vec::new());
        assert!(report.passed());
        assert_eq!(1.0, report.summary.score);
    }

    #[test]
    fn serializes_status_lowercase() {
        let report = GradeReport::new("run-4", 7, vec![Expectation::check(false, "x")]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!("fail", json["summary"]["status"]);
        assert_eq!(7, json["seed"]);
        assert_eq!(false, json["checks"][0]["passed"]);
    }
}
