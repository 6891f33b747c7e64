//! Current approval status per application, derived from the submission
//! history. Everything here is a pure function of its inputs.

use std::fmt;

use serde::Serialize;

use crate::model::{Decision, SubmissionEvent};

mod dashboard;
mod history;

pub use self::dashboard::{AppBadge, DrillTarget, dashboard, drill_target};
pub use self::history::{DecisionFilter, DecisionStats, SubmissionQuery, for_environment};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppStatus {
    NoChanges,
    Approved,
    Rejected,
    TimedApproval,
    Pending,
}

impl AppStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppStatus::NoChanges => "No Changes",
            AppStatus::Approved => "Approved",
            AppStatus::Rejected => "Rejected",
            AppStatus::TimedApproval => "Timed Approval",
            AppStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for AppStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&Decision> for AppStatus {
    fn from(decision: &Decision) -> Self {
        match decision {
            Decision::Approved => AppStatus::Approved,
            Decision::Rejected => AppStatus::Rejected,
            Decision::Timed => AppStatus::TimedApproval,
            Decision::Other(_) => AppStatus::Pending,
        }
    }
}

/// Most recent submission for `app_name`. Unparseable timestamps rank older
/// than every parseable one; among equal instants the later entry wins.
pub fn latest<'a>(app_name: &str, submissions: &'a [SubmissionEvent]) -> Option<&'a SubmissionEvent> {
    submissions
        .iter()
        .filter(|s| s.app_name == app_name)
        .max_by_key(|s| s.submitted_at())
}

pub fn status(app_name: &str, submissions: &[SubmissionEvent]) -> AppStatus {
    match latest(app_name, submissions) {
        None => AppStatus::NoChanges,
        Some(event) => AppStatus::from(&event.decision),
    }
}

#[cfg(test)]
#[path = "tests/status_tests.rs"]
mod tests;
