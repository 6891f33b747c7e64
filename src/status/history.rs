use std::cmp::Reverse;
use std::str::FromStr;

use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionFilter {
    #[default]
    All,
    Approved,
    Rejected,
    Timed,
}

impl DecisionFilter {
    pub fn matches(self, decision: &Decision) -> bool {
        match self {
            DecisionFilter::All => true,
            DecisionFilter::Approved => *decision == Decision::Approved,
            DecisionFilter::Rejected => *decision == Decision::Rejected,
            DecisionFilter::Timed => *decision == Decision::Timed,
        }
    }
}

impl FromStr for DecisionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(DecisionFilter::All),
            "approved" => Ok(DecisionFilter::Approved),
            "rejected" => Ok(DecisionFilter::Rejected),
            "timed" => Ok(DecisionFilter::Timed),
            other => Err(format!(
                "unknown decision filter {:?} (expected all, approved, rejected or timed)",
                other
            )),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionQuery {
    pub search: String,
    pub decision: DecisionFilter,
}

impl SubmissionQuery {
    fn matches_search(&self, event: &SubmissionEvent) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(&needle);
        hit(&event.app_name)
            || hit(&event.change_number)
            || hit(&event.approver_name)
            || event.approver_email.as_deref().is_some_and(hit)
            || event.comments.as_deref().is_some_and(hit)
    }

    /// Matching submissions, newest first.
    pub fn filter<'a>(&self, submissions: &'a [SubmissionEvent]) -> Vec<&'a SubmissionEvent> {
        let mut out: Vec<&SubmissionEvent> = submissions
            .iter()
            .filter(|s| self.decision.matches(&s.decision) && self.matches_search(s))
            .collect();
        out.sort_by_key(|s| Reverse(s.submitted_at()));
        out
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecisionStats {
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    pub timed: usize,
}

impl DecisionStats {
    pub fn tally<'a>(events: impl IntoIterator<Item = &'a SubmissionEvent>) -> Self {
        let mut stats = DecisionStats::default();
        for event in events {
            stats.total += 1;
            match event.decision {
                Decision::Approved => stats.approved += 1,
                Decision::Rejected => stats.rejected += 1,
                Decision::Timed => stats.timed += 1,
                Decision::Other(_) => {}
            }
        }
        stats
    }
}

pub fn for_environment(submissions: &[SubmissionEvent], environment: &str) -> Vec<SubmissionEvent> {
    submissions
        .iter()
        .filter(|s| s.environment == environment)
        .cloned()
        .collect()
}
