//! Form session that stages one record into an [`EditBuffer`].
//!
//! Nothing here talks to the backend. Committing only hands the record to
//! [`EditBuffer::upsert`]; persistence happens later through a batch save.

use crate::buffer::{BufferError, EditBuffer, EditTarget};
use crate::model::{ApplicationRecord, RequiredField, parse_hosts};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    AppName,
    ChangeNumber,
    ApplicationOwner,
    MaintenanceWindow,
    ChangeDescription,
    InfrastructureImpact,
    Hosts,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    #[error("cannot save: missing {}", list(.0))]
    Invalid(Vec<RequiredField>),

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

fn list(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" and ")
}

/// A commit that did not go through. The session is handed back unchanged so
/// the operator can fix it and retry.
#[derive(Debug)]
pub struct Rejected {
    pub editor: RecordEditor,
    pub error: EditError,
}

#[derive(Clone, Debug)]
pub struct RecordEditor {
    target: EditTarget,
    record: ApplicationRecord,
    // Verbatim host text, including trailing separators mid-typing.
    hosts_text: String,
}

impl RecordEditor {
    /// Session over a blank, enabled record.
    pub fn create() -> Self {
        Self {
            target: EditTarget::New,
            record: ApplicationRecord::blank(),
            hosts_text: String::new(),
        }
    }

    /// Session over a copy of the working record named `name`.
    pub fn edit(buffer: &EditBuffer, name: &str) -> Result<Self, EditError> {
        let record = buffer
            .get(name)
            .cloned()
            .ok_or_else(|| BufferError::NotFound(name.to_string()))?;
        let hosts_text = record.hosts.join("\n");
        Ok(Self {
            target: EditTarget::Existing(name.to_string()),
            record,
            hosts_text,
        })
    }

    pub fn is_new(&self) -> bool {
        self.target == EditTarget::New
    }

    pub fn target(&self) -> &EditTarget {
        &self.target
    }

    pub fn record(&self) -> &ApplicationRecord {
        &self.record
    }

    pub fn hosts_text(&self) -> &str {
        &self.hosts_text
    }

    pub fn host_count(&self) -> usize {
        self.record.hosts.len()
    }

    pub fn change(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::AppName => &mut self.record.app_name,
            Field::ChangeNumber => &mut self.record.change_number,
            Field::ApplicationOwner => &mut self.record.application_owner,
            Field::MaintenanceWindow => &mut self.record.maintenance_window,
            Field::ChangeDescription => &mut self.record.change_description,
            Field::InfrastructureImpact => &mut self.record.infrastructure_impact,
            Field::Hosts => {
                self.hosts_text = value.to_string();
                self.record.hosts = parse_hosts(value);
                return;
            }
        };
        *slot = value.to_string();
    }

    pub fn missing_fields(&self) -> Vec<RequiredField> {
        self.record.missing_fields()
    }

    pub fn validate(&self) -> bool {
        self.record.is_savable()
    }

    /// Stages the record and ends the session, returning the saved name.
    pub fn commit(self, buffer: &mut EditBuffer) -> Result<String, Rejected> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Rejected {
                editor: self,
                error: EditError::Invalid(missing),
            });
        }

        let name = self.record.app_name.clone();
        match buffer.upsert(self.record.clone(), &self.target) {
            Ok(()) => Ok(name),
            Err(err) => Err(Rejected {
                editor: self,
                error: err.into(),
            }),
        }
    }

    /// Ends the session without touching any buffer.
    pub fn cancel(self) {}
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
