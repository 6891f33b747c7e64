use std::fmt;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Outcome recorded against a single submission.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Decision {
    Approved,
    Rejected,
    Timed,
    Other(String),
}

impl Decision {
    pub fn as_str(&self) -> &str {
        match self {
            Decision::Approved => "Approved",
            Decision::Rejected => "Rejected",
            Decision::Timed => "Timed",
            Decision::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Decision::Other(_))
    }
}

impl From<String> for Decision {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Approved" => Decision::Approved,
            "Rejected" => Decision::Rejected,
            "Timed" => Decision::Timed,
            _ => Decision::Other(s),
        }
    }
}

impl From<Decision> for String {
    fn from(d: Decision) -> Self {
        match d {
            Decision::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionEvent {
    pub app_name: String,
    pub change_number: String,
    pub approver_name: String,

    #[serde(default)]
    pub approver_email: Option<String>,

    pub decision: Decision,
    pub timestamp: String,
    pub environment: String,

    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl SubmissionEvent {
    /// Parsed submission time; `None` when the backend sent something that is
    /// not an ISO 8601 timestamp.
    pub fn submitted_at(&self) -> Option<OffsetDateTime> {
        parse_timestamp(&self.timestamp)
    }
}

/// Accepts RFC 3339 and the wider ISO 8601 forms. A date-time without an
/// offset, or a bare date, is read as UTC. A space may stand in for the `T`.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    let normalized;
    let text = if raw.as_bytes().get(10) == Some(&b' ') {
        normalized = format!("{}T{}", &raw[..10], &raw[11..]);
        normalized.as_str()
    } else {
        raw
    };

    if let Ok(at) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(at);
    }
    if let Ok(at) = OffsetDateTime::parse(text, &Iso8601::DEFAULT) {
        return Some(at);
    }
    if let Ok(at) = PrimitiveDateTime::parse(text, &Iso8601::DEFAULT) {
        return Some(at.assume_utc());
    }
    Date::parse(text, &Iso8601::DEFAULT)
        .ok()
        .map(|date| date.midnight().assume_utc())
}
