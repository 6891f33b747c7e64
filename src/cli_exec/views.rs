use serde::Serialize;

use portfolio::backend::Backend;
use portfolio::model::SubmissionEvent;
use portfolio::notify::Notifier;
use portfolio::status::{
    AppBadge, DecisionFilter, DecisionStats, DrillTarget, SubmissionQuery, dashboard, drill_target,
    for_environment,
};

use super::*;

fn load_submissions(client: &RemoteClient, trace: &mut Trace) -> Result<Vec<SubmissionEvent>> {
    client.load_submissions().inspect_err(|_| {
        notifier(trace).error(
            "Failed to Load Submissions",
            "Unable to fetch submission data. Please check your connection and try again.",
        );
    })
}

#[derive(Serialize)]
struct StatusView<'a> {
    environment: &'a str,
    apps: Vec<AppBadge>,
}

pub(super) fn handle_status_command(
    store: &LocalStore,
    trace: &mut Trace,
    search: &str,
    json: bool,
) -> Result<()> {
    let remote = store.require_remote()?;
    let client = RemoteClient::new(remote.clone())?;
    let apps = client.load_apps().inspect_err(|_| {
        notifier(trace).error(
            "Failed to Load Applications",
            "Unable to fetch application data.",
        );
    })?;
    let submissions = load_submissions(&client, trace)?;

    let badges = dashboard(&apps, &submissions, &remote.environment, search);
    if json {
        return print_json(
            &StatusView {
                environment: &remote.environment,
                apps: badges,
            },
            "status",
        );
    }

    println!("environment: {}", remote.environment);
    if badges.is_empty() {
        println!("No enabled applications");
        return Ok(());
    }
    let in_env = for_environment(&submissions, &remote.environment);
    for badge in badges {
        let next = match drill_target(&badge.app_name, &in_env) {
            DrillTarget::Submissions { search } => {
                format!("portfolio submissions --search {:?}", search)
            }
            DrillTarget::AppDetail { app_name } => format!("portfolio apps show {:?}", app_name),
        };
        println!("{}  {}  ({})", badge.app_name, badge.label, next);
    }
    Ok(())
}

#[derive(Serialize)]
struct SubmissionsView<'a> {
    environment: &'a str,
    stats: DecisionStats,
    submissions: Vec<&'a SubmissionEvent>,
}

pub(super) fn handle_submissions_command(
    store: &LocalStore,
    trace: &mut Trace,
    search: &str,
    decision: DecisionFilter,
    json: bool,
) -> Result<()> {
    let remote = store.require_remote()?;
    let client = RemoteClient::new(remote.clone())?;
    let all = load_submissions(&client, trace)?;
    let in_env = for_environment(&all, &remote.environment);

    let stats = DecisionStats::tally(&in_env);
    let query = SubmissionQuery {
        search: search.to_string(),
        decision,
    };
    let hits = query.filter(&in_env);

    if json {
        return print_json(
            &SubmissionsView {
                environment: &remote.environment,
                stats,
                submissions: hits,
            },
            "submissions",
        );
    }

    println!(
        "environment: {}  total: {}  approved: {}  rejected: {}  timed: {}",
        remote.environment, stats.total, stats.approved, stats.rejected, stats.timed
    );
    if hits.is_empty() {
        println!("No submissions");
    }
    for s in hits {
        println!(
            "{}  {}  {}  {}  by {}",
            s.timestamp, s.app_name, s.change_number, s.decision, s.approver_name
        );
        if let Some(comments) = s.comments.as_deref().filter(|c| !c.trim().is_empty()) {
            println!("    {}", comments);
        }
    }
    Ok(())
}
