use anyhow::anyhow;

use super::*;

impl RemoteClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        resp.error_for_status()
            .with_context(|| format!("{} status", label))
    }

    /// Base URL with `segments` appended, each percent-encoded.
    pub(super) fn url(&self, segments: &[&str]) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.remote.base_url)
            .with_context(|| format!("parse remote url {:?}", self.remote.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("remote url {:?} cannot carry a path", self.remote.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
