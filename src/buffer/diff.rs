use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::model::ApplicationRecord;

/// Names whose working state differs from the baseline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Diff {
    /// In both collections with different content.
    pub changed: BTreeSet<String>,
    /// In the working copy only.
    pub added: BTreeSet<String>,
    /// In the baseline only (pending deletion).
    pub deleted: BTreeSet<String>,
}

impl Diff {
    pub(super) fn between(original: &[ApplicationRecord], working: &[ApplicationRecord]) -> Self {
        let mut baseline: HashMap<&str, &ApplicationRecord> = HashMap::new();
        for record in original {
            baseline.entry(record.app_name.as_str()).or_insert(record);
        }

        let mut diff = Diff::default();
        for record in working {
            match baseline.get(record.app_name.as_str()) {
                Some(orig) if orig.same_content(record) => {}
                Some(_) => {
                    diff.changed.insert(record.app_name.clone());
                }
                None => {
                    diff.added.insert(record.app_name.clone());
                }
            }
        }

        let present: BTreeSet<&str> = working.iter().map(|a| a.app_name.as_str()).collect();
        diff.deleted = baseline
            .into_keys()
            .filter(|name| !present.contains(name))
            .map(str::to_string)
            .collect();

        diff
    }

    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.added.is_empty() && self.deleted.is_empty()
    }

    /// Whether `name` should carry an "unsaved" marker in a listing.
    pub fn is_marked(&self, name: &str) -> bool {
        self.changed.contains(name) || self.added.contains(name)
    }

    pub fn len(&self) -> usize {
        self.changed.len() + self.added.len() + self.deleted.len()
    }

    /// One line per name, prefixed `~` (changed), `+` (added) or `-` (deleted).
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.len());
        lines.extend(self.changed.iter().map(|n| format!("~ {}", n)));
        lines.extend(self.added.iter().map(|n| format!("+ {}", n)));
        lines.extend(self.deleted.iter().map(|n| format!("- {}", n)));
        lines
    }
}
