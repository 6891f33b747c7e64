use anyhow::{Context, Result};

use crate::backend::Backend;
use crate::model::{ApplicationRecord, RemoteConfig, SubmissionEvent};

mod http_client;

mod types;
pub use self::types::*;
mod operations;

/// Blocking HTTP client for the application-configuration service.
pub struct RemoteClient {
    remote: RemoteConfig,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(remote: RemoteConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("portfolio")
            .build()
            .context("build reqwest client")?;
        Ok(Self { remote, client })
    }

    pub fn remote(&self) -> &RemoteConfig {
        &self.remote
    }
}

impl Backend for RemoteClient {
    fn load_apps(&self) -> Result<Vec<ApplicationRecord>> {
        self.list_apps()
    }

    fn update_submission_config(&self, apps: &[ApplicationRecord]) -> Result<()> {
        self.replace_apps(apps)
    }

    fn update_app(&self, name: &str, record: &ApplicationRecord) -> Result<ApplicationRecord> {
        self.put_app(name, record)
    }

    fn delete_app(&self, name: &str) -> Result<()> {
        self.remove_app(name)
    }

    fn load_submissions(&self) -> Result<Vec<SubmissionEvent>> {
        self.list_submissions()
    }
}
