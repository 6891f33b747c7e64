//! Working copy of the application list and its reconciliation against the
//! last-persisted baseline.
//!
//! `original` is what the backend is known to hold; `working` is what the
//! operator has staged. Both are owned `Vec`s, so cloning one never aliases
//! the other. The diff between them is always recomputed, never stored.

use serde::{Deserialize, Serialize};

use crate::model::{ApplicationRecord, Enablement, RequiredField};

mod diff;
mod rows;

pub use self::diff::Diff;
pub use self::rows::AppRow;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("an application named {0:?} already exists")]
    NameCollision(String),

    #[error("no application named {0:?}")]
    NotFound(String),

    #[error("missing required fields: {}", join_fields(.0))]
    Invalid(Vec<RequiredField>),
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Where an upserted record goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditTarget {
    /// Append as a new application.
    New,
    /// Replace the entry that had this name before the edit began.
    Existing(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBuffer {
    original: Vec<ApplicationRecord>,
    working: Vec<ApplicationRecord>,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn original(&self) -> &[ApplicationRecord] {
        &self.original
    }

    pub fn working(&self) -> &[ApplicationRecord] {
        &self.working
    }

    pub fn get(&self, name: &str) -> Option<&ApplicationRecord> {
        self.working.iter().find(|a| a.app_name == name)
    }

    pub fn baseline(&self, name: &str) -> Option<&ApplicationRecord> {
        self.original.iter().find(|a| a.app_name == name)
    }

    pub fn load(&mut self, records: &[ApplicationRecord]) {
        self.original = records.to_vec();
        self.working = records.to_vec();
    }

    pub fn upsert(
        &mut self,
        record: ApplicationRecord,
        target: &EditTarget,
    ) -> Result<(), BufferError> {
        let missing = record.missing_fields();
        if !missing.is_empty() {
            return Err(BufferError::Invalid(missing));
        }

        match target {
            EditTarget::New => {
                if self.get(&record.app_name).is_some() {
                    return Err(BufferError::NameCollision(record.app_name));
                }
                self.working.push(record);
            }
            EditTarget::Existing(key) => {
                let Some(idx) = self.position(key) else {
                    return Err(BufferError::NotFound(key.clone()));
                };
                if record.app_name != *key && self.get(&record.app_name).is_some() {
                    return Err(BufferError::NameCollision(record.app_name));
                }
                self.working[idx] = record;
            }
        }
        Ok(())
    }

    /// Drops `name` from the working copy only; it stays in the baseline as a
    /// pending deletion.
    pub fn remove(&mut self, name: &str) -> Result<ApplicationRecord, BufferError> {
        let Some(idx) = self.position(name) else {
            return Err(BufferError::NotFound(name.to_string()));
        };
        Ok(self.working.remove(idx))
    }

    pub fn discard(&mut self) {
        self.working = self.original.clone();
    }

    pub fn commit(&mut self, new_baseline: &[ApplicationRecord]) {
        self.load(new_baseline);
    }

    /// Applies an enablement change that has already been persisted, to both
    /// collections at once so it never shows up as unsaved.
    pub fn settle_enablement(&mut self, name: &str, state: Enablement) {
        for record in self
            .original
            .iter_mut()
            .chain(self.working.iter_mut())
            .filter(|a| a.app_name == name)
        {
            record.set_enablement(state);
        }
    }

    pub fn diff(&self) -> Diff {
        Diff::between(&self.original, &self.working)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        !self.diff().is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.working.iter().position(|a| a.app_name == name)
    }
}

#[cfg(test)]
#[path = "tests/buffer_tests.rs"]
mod tests;
