//! The five backend endpoints.

use super::*;

impl RemoteClient {
    pub fn list_apps(&self) -> Result<Vec<ApplicationRecord>> {
        let resp = self
            .client
            .get(self.url(&["api", "apps"])?)
            .send()
            .context("list apps request")?;
        let apps: Vec<ApplicationRecord> = self
            .ensure_ok(resp, "list apps")?
            .json()
            .context("parse apps")?;
        Ok(apps)
    }

    /// Replaces the whole collection in one call.
    pub fn replace_apps(&self, apps: &[ApplicationRecord]) -> Result<()> {
        let resp = self
            .client
            .put(self.url(&["api", "apps"])?)
            .json(apps)
            .send()
            .context("replace apps request")?;
        self.ensure_ok(resp, "replace apps")?;
        Ok(())
    }

    /// Writes a single record. Servers that answer without a record body
    /// get the sent record back.
    pub fn put_app(&self, name: &str, record: &ApplicationRecord) -> Result<ApplicationRecord> {
        let resp = self
            .client
            .put(self.url(&["api", "app", name])?)
            .json(record)
            .send()
            .with_context(|| format!("update app {} request", name))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("application not found: {}", name);
        }

        let body = self
            .ensure_ok(resp, "update app")?
            .text()
            .context("read update app response")?;
        if body.trim().is_empty() {
            return Ok(record.clone());
        }
        let value: serde_json::Value =
            serde_json::from_str(&body).context("parse update app response")?;
        if value.get("appName").is_none() {
            return Ok(record.clone());
        }
        let updated: ApplicationRecord =
            serde_json::from_value(value).context("parse updated app")?;
        Ok(updated)
    }

    pub fn remove_app(&self, name: &str) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&["api", "app", name])?)
            .send()
            .with_context(|| format!("delete app {} request", name))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("application not found: {}", name);
        }

        self.ensure_ok(resp, "delete app")?;
        Ok(())
    }

    /// Submission history. Entries missing their application or form half
    /// are dropped.
    pub fn list_submissions(&self) -> Result<Vec<SubmissionEvent>> {
        let resp = self
            .client
            .get(self.url(&["api", "submissions"])?)
            .send()
            .context("list submissions request")?;
        let raw: Vec<BackendSubmission> = self
            .ensure_ok(resp, "list submissions")?
            .json()
            .context("parse submissions")?;
        Ok(raw.into_iter().filter_map(BackendSubmission::into_event).collect())
    }
}

#[cfg(test)]
#[path = "../tests/remote/operations_tests.rs"]
mod tests;
