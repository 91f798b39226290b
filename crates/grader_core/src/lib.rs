pub mod config;
pub mod error;
pub mod expect;
pub mod registry;
pub mod report;
pub mod roster;
pub mod scenario;

pub use config::{GraderConfig, ScenarioToggles, TelemetryConfig};
pub use error::GradeError;
pub use expect::{expect, Expectation, FAIL_MARKER, PASS_MARKER};
pub use registry::{collect, send_all, Dossier, Spyable};
pub use report::{GradeReport, ReportStatus, ReportSummary};
pub use roster::Roster;
pub use scenario::{run_scenario, run_scenario_with, ScenarioOptions};
