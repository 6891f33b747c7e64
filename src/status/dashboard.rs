use std::collections::HashSet;

use super::*;
use crate::model::ApplicationRecord;

/// One tile of the per-environment status board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppBadge {
    pub app_name: String,
    pub status: AppStatus,
    pub label: &'static str,
}

/// Enabled applications matching `search`, sorted by name, each with the
/// status derived from submissions in `environment`.
pub fn dashboard(
    apps: &[ApplicationRecord],
    submissions: &[SubmissionEvent],
    environment: &str,
    search: &str,
) -> Vec<AppBadge> {
    let enabled: HashSet<&str> = apps
        .iter()
        .filter(|a| a.enablement().is_enabled())
        .map(|a| a.app_name.as_str())
        .collect();

    let relevant: Vec<SubmissionEvent> = for_environment(submissions, environment)
        .into_iter()
        .filter(|s| enabled.contains(s.app_name.as_str()))
        .collect();

    let needle = search.trim().to_lowercase();
    let mut names: Vec<&str> = enabled
        .into_iter()
        .filter(|n| needle.is_empty() || n.to_lowercase().contains(&needle))
        .collect();
    names.sort_unstable();

    names
        .into_iter()
        .map(|name| {
            let status = status(name, &relevant);
            AppBadge {
                app_name: name.to_string(),
                status,
                label: status.label(),
            }
        })
        .collect()
}

/// Where selecting a dashboard tile leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrillTarget {
    /// The submission history, pre-searched for the application.
    Submissions { search: String },
    /// The application's own detail view.
    AppDetail { app_name: String },
}

pub fn drill_target(app_name: &str, submissions: &[SubmissionEvent]) -> DrillTarget {
    let decided = submissions
        .iter()
        .any(|s| s.app_name == app_name && s.decision.is_known());
    if decided {
        DrillTarget::Submissions {
            search: app_name.to_string(),
        }
    } else {
        DrillTarget::AppDetail {
            app_name: app_name.to_string(),
        }
    }
}
