use serde::Serialize;

use super::*;

/// One line of the application listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppRow {
    pub app_name: String,
    pub change_number: String,
    pub application_owner: String,
    pub host_count: usize,
    pub enablement: Enablement,
    pub unsaved: bool,
}

impl EditBuffer {
    /// Working records whose name contains `search` (case-insensitive),
    /// sorted by name.
    pub fn rows(&self, search: &str) -> Vec<AppRow> {
        let diff = self.diff();
        let needle = search.trim().to_lowercase();
        let mut rows: Vec<AppRow> = self
            .working
            .iter()
            .filter(|a| needle.is_empty() || a.app_name.to_lowercase().contains(&needle))
            .map(|a| AppRow {
                app_name: a.app_name.clone(),
                change_number: a.change_number.clone(),
                application_owner: a.application_owner.clone(),
                host_count: a.hosts.len(),
                enablement: a.enablement(),
                unsaved: diff.is_marked(&a.app_name),
            })
            .collect();
        rows.sort_by(|a, b| a.app_name.cmp(&b.app_name));
        rows
    }
}
