//! Wire forms that differ from the core model.

use serde::{Deserialize, Serialize};

use crate::model::{Decision, SubmissionEvent};

/// Application snapshot embedded in a submission.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionAppData {
    pub app_name: String,
    pub change_number: String,
    pub application_owner: String,
    pub maintenance_window: String,
    pub change_description: String,
    pub infrastructure_impact: String,
    pub hosts: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    #[serde(default)]
    pub change_number: String,
    #[serde(default)]
    pub approver_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver_email: Option<String>,
    pub decision: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// One entry of `GET /api/submissions`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendSubmission {
    #[serde(default)]
    pub app_data: Option<SubmissionAppData>,
    #[serde(default)]
    pub form_submission: Option<FormSubmission>,
    #[serde(default)]
    pub submitted_at: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl BackendSubmission {
    /// Flattens into a [`SubmissionEvent`]; `None` when either half is missing.
    pub fn into_event(self) -> Option<SubmissionEvent> {
        let app = self.app_data?;
        let form = self.form_submission?;
        Some(SubmissionEvent {
            app_name: app.app_name,
            change_number: form.change_number,
            approver_name: form.approver_name,
            approver_email: form.approver_email,
            decision: Decision::from(form.decision),
            timestamp: self.submitted_at,
            environment: form.environment,
            start_time: form.start_time,
            end_time: form.end_time,
            comments: form.comments,
        })
    }
}
