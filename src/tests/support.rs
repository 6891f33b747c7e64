//! In-memory backend and fixtures shared by the unit tests.

use std::cell::{Cell, RefCell};

use anyhow::Result;

use crate::backend::Backend;
use crate::model::{ApplicationRecord, Decision, Enablement, SubmissionEvent};

pub(crate) fn app(name: &str, change: &str) -> ApplicationRecord {
    ApplicationRecord {
        app_name: name.to_string(),
        change_number: change.to_string(),
        application_owner: "ops".to_string(),
        hosts: vec![format!("{}.example.com", name.to_lowercase())],
        ..Default::default()
    }
    .with_enablement(Enablement::Enabled)
}

pub(crate) fn submission(app: &str, decision: &str, ts: &str, env: &str) -> SubmissionEvent {
    SubmissionEvent {
        app_name: app.to_string(),
        change_number: format!("CHG-{}", app),
        approver_name: "Dana Approver".to_string(),
        approver_email: Some("dana@example.com".to_string()),
        decision: Decision::from(decision.to_string()),
        timestamp: ts.to_string(),
        environment: env.to_string(),
        start_time: None,
        end_time: None,
        comments: None,
    }
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    pub(crate) apps: RefCell<Vec<ApplicationRecord>>,
    pub(crate) submissions: RefCell<Vec<SubmissionEvent>>,
    pub(crate) fail_load: Cell<bool>,
    pub(crate) fail_save: Cell<bool>,
    pub(crate) fail_update: Cell<bool>,
    // Upper-cases change numbers on save, like a server that normalizes input.
    pub(crate) normalize: Cell<bool>,
    pub(crate) calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub(crate) fn with_apps(apps: Vec<ApplicationRecord>) -> Self {
        let backend = Self::default();
        *backend.apps.borrow_mut() = apps;
        backend
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Backend for FakeBackend {
    fn load_apps(&self) -> Result<Vec<ApplicationRecord>> {
        self.record("load_apps".to_string());
        if self.fail_load.get() {
            anyhow::bail!("connection refused");
        }
        Ok(self.apps.borrow().clone())
    }

    fn update_submission_config(&self, apps: &[ApplicationRecord]) -> Result<()> {
        self.record(format!("update_submission_config({})", apps.len()));
        if self.fail_save.get() {
            anyhow::bail!("500 Internal Server Error");
        }
        let mut stored = apps.to_vec();
        if self.normalize.get() {
            for a in &mut stored {
                a.change_number = a.change_number.to_uppercase();
            }
        }
        *self.apps.borrow_mut() = stored;
        Ok(())
    }

    fn update_app(&self, name: &str, record: &ApplicationRecord) -> Result<ApplicationRecord> {
        self.record(format!("update_app({})", name));
        if self.fail_update.get() {
            anyhow::bail!("503 Service Unavailable");
        }
        let mut apps = self.apps.borrow_mut();
        let Some(slot) = apps.iter_mut().find(|a| a.app_name == name) else {
            anyhow::bail!("application not found");
        };
        *slot = record.clone();
        Ok(record.clone())
    }

    fn delete_app(&self, name: &str) -> Result<()> {
        self.record(format!("delete_app({})", name));
        self.apps.borrow_mut().retain(|a| a.app_name != name);
        Ok(())
    }

    fn load_submissions(&self) -> Result<Vec<SubmissionEvent>> {
        self.record("load_submissions".to_string());
        if self.fail_load.get() {
            anyhow::bail!("connection refused");
        }
        Ok(self.submissions.borrow().clone())
    }
}
