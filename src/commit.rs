//! Batch save of the whole working collection.

use serde::Serialize;

use crate::backend::Backend;
use crate::buffer::{Diff, EditBuffer};
use crate::notify::Notifier;

#[derive(Debug, thiserror::Error)]
pub enum CommitError {
    #[error("no save is awaiting confirmation")]
    NothingPending,

    #[error("save changes: {0:#}")]
    Backend(anyhow::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SavePhase {
    #[default]
    Idle,
    ConfirmPending,
}

impl SavePhase {
    pub fn label(&self) -> &'static str {
        match self {
            SavePhase::Idle => "idle",
            SavePhase::ConfirmPending => "confirm_pending",
        }
    }
}

/// What asking for a save produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveRequest {
    /// Nothing differs from the baseline; no confirmation is needed.
    NothingToSave,
    /// Waiting for the operator to confirm saving these changes.
    ConfirmPending(Diff),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    pub saved: usize,
    pub diff: Diff,
    /// False when the post-save reload failed; the buffer then keeps the
    /// just-saved collection as its baseline.
    pub reloaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reload_error: Option<String>,
}

pub const SAVE_PROMPT: &str =
    "Do you want to save all the changes? This will update the application configurations.";

#[derive(Debug, Default)]
pub struct BatchCommitter {
    phase: SavePhase,
}

impl BatchCommitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SavePhase {
        &self.phase
    }

    pub fn request(&mut self, buffer: &EditBuffer) -> SaveRequest {
        let diff = buffer.diff();
        if diff.is_empty() {
            self.phase = SavePhase::Idle;
            return SaveRequest::NothingToSave;
        }
        self.phase = SavePhase::ConfirmPending;
        SaveRequest::ConfirmPending(diff)
    }

    pub fn cancel(&mut self) {
        if self.phase == SavePhase::ConfirmPending {
            self.phase = SavePhase::Idle;
        }
    }

    /// Sends the working collection as one replace-all. Only after that call
    /// succeeds is the baseline promoted and a fresh load issued.
    ///
    /// Returns `Ok(None)` when there turned out to be nothing to save.
    pub fn confirm(
        &mut self,
        buffer: &mut EditBuffer,
        backend: &dyn Backend,
        notifier: &mut dyn Notifier,
    ) -> Result<Option<SaveReport>, CommitError> {
        if self.phase != SavePhase::ConfirmPending {
            return Err(CommitError::NothingPending);
        }
        self.phase = SavePhase::Idle;
        let diff = buffer.diff();
        if diff.is_empty() {
            return Ok(None);
        }

        let working = buffer.working().to_vec();
        if let Err(err) = backend.update_submission_config(&working) {
            notifier.error("Save Failed", "Failed to save configuration changes.");
            return Err(CommitError::Backend(err));
        }

        buffer.commit(&working);
        notifier.success("Success", "All changes saved successfully");

        let reload_error = match backend.load_apps() {
            Ok(apps) => {
                buffer.load(&apps);
                None
            }
            Err(err) => {
                notifier.error(
                    "Failed to Load Applications",
                    "Unable to fetch application data.",
                );
                Some(format!("{:#}", err))
            }
        };

        Ok(Some(SaveReport {
            saved: working.len(),
            diff,
            reloaded: reload_error.is_none(),
            reload_error,
        }))
    }
}

#[cfg(test)]
#[path = "tests/commit_tests.rs"]
mod tests;
