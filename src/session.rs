//! The surface-facing session: one buffer, its load state, at most one open
//! editor, and the confirmation flows that act on them.

use crate::backend::Backend;
use crate::buffer::{AppRow, Diff, EditBuffer};
use crate::commit::{BatchCommitter, CommitError, SaveReport, SaveRequest};
use crate::editor::{EditError, RecordEditor, Rejected};
use crate::lifecycle::{LifecycleController, LifecycleError, ToggleRequest};
use crate::model::{ApplicationRecord, Enablement, SubmissionEvent};
use crate::notify::Notifier;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Ready,
    /// The last load failed; stays until a later load succeeds.
    Failed(String),
}

impl LoadState {
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::NotLoaded => "not_loaded",
            LoadState::Ready => "ready",
            LoadState::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no editor is open")]
    NoEditor,

    #[error("an editor is already open for {0}")]
    EditorOpen(String),

    #[error("load applications: {0:#}")]
    Load(anyhow::Error),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    Commit(#[from] CommitError),
}

pub struct AppsSession<B> {
    backend: B,
    buffer: EditBuffer,
    load_state: LoadState,
    editor: Option<RecordEditor>,
    lifecycle: LifecycleController,
    committer: BatchCommitter,
}

impl<B: Backend> AppsSession<B> {
    pub fn new(backend: B) -> Self {
        Self::resume(backend, EditBuffer::new())
    }

    /// Continues an edit session whose buffer was persisted earlier. A
    /// non-empty buffer counts as loaded.
    pub fn resume(backend: B, buffer: EditBuffer) -> Self {
        let load_state = if buffer.original().is_empty() && buffer.working().is_empty() {
            LoadState::NotLoaded
        } else {
            LoadState::Ready
        };
        Self {
            backend,
            buffer,
            load_state,
            editor: None,
            lifecycle: LifecycleController::new(),
            committer: BatchCommitter::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> EditBuffer {
        self.buffer
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn lifecycle(&self) -> &LifecycleController {
        &self.lifecycle
    }

    pub fn committer(&self) -> &BatchCommitter {
        &self.committer
    }

    /// Replaces both collections with a fresh copy from the backend. On
    /// failure the buffer is left alone and the session enters
    /// [`LoadState::Failed`]; calling `load` again is the retry.
    pub fn load(&mut self, notifier: &mut dyn Notifier) -> Result<usize, SessionError> {
        match self.backend.load_apps() {
            Ok(apps) => {
                self.buffer.load(&apps);
                self.load_state = LoadState::Ready;
                Ok(apps.len())
            }
            Err(err) => {
                self.load_state = LoadState::Failed(format!("{:#}", err));
                notifier.error(
                    "Failed to Load Applications",
                    "Unable to fetch application data.",
                );
                Err(SessionError::Load(err))
            }
        }
    }

    pub fn load_submissions(&self) -> anyhow::Result<Vec<SubmissionEvent>> {
        self.backend.load_submissions()
    }

    pub fn rows(&self, search: &str) -> Vec<AppRow> {
        self.buffer.rows(search)
    }

    pub fn get(&self, name: &str) -> Option<&ApplicationRecord> {
        self.buffer.get(name)
    }

    pub fn diff(&self) -> Diff {
        self.buffer.diff()
    }

    pub fn discard(&mut self) {
        self.buffer.discard();
    }

    // Editor

    pub fn editor(&self) -> Option<&RecordEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut RecordEditor> {
        self.editor.as_mut()
    }

    fn ensure_no_editor(&self) -> Result<(), SessionError> {
        match &self.editor {
            None => Ok(()),
            Some(open) if open.is_new() => {
                Err(SessionError::EditorOpen("a new application".to_string()))
            }
            Some(open) => Err(SessionError::EditorOpen(format!(
                "{:?}",
                open.record().app_name
            ))),
        }
    }

    pub fn open_create(&mut self) -> Result<&mut RecordEditor, SessionError> {
        self.ensure_no_editor()?;
        Ok(self.editor.insert(RecordEditor::create()))
    }

    pub fn open_edit(&mut self, name: &str) -> Result<&mut RecordEditor, SessionError> {
        self.ensure_no_editor()?;
        let editor = RecordEditor::edit(&self.buffer, name)?;
        Ok(self.editor.insert(editor))
    }

    /// Stages the open editor's record. A rejected commit keeps the editor
    /// open with its contents intact.
    pub fn commit_editor(&mut self) -> Result<String, SessionError> {
        let editor = self.editor.take().ok_or(SessionError::NoEditor)?;
        match editor.commit(&mut self.buffer) {
            Ok(name) => Ok(name),
            Err(Rejected { editor, error }) => {
                self.editor = Some(editor);
                Err(error.into())
            }
        }
    }

    pub fn cancel_editor(&mut self) {
        if let Some(editor) = self.editor.take() {
            editor.cancel();
        }
    }

    // Enable / disable

    pub fn request_toggle(&mut self, name: &str) -> Result<ToggleRequest, SessionError> {
        Ok(self.lifecycle.request_toggle(&self.buffer, name)?)
    }

    pub fn confirm_toggle(&mut self, notifier: &mut dyn Notifier) -> Result<Enablement, SessionError> {
        Ok(self
            .lifecycle
            .confirm_toggle(&mut self.buffer, &self.backend, notifier)?)
    }

    pub fn cancel_toggle(&mut self) {
        self.lifecycle.cancel_toggle();
    }

    // Delete

    pub fn request_delete(&mut self, name: &str) -> Result<(), SessionError> {
        Ok(self.lifecycle.request_delete(&self.buffer, name)?)
    }

    pub fn confirm_delete(&mut self, notifier: &mut dyn Notifier) -> Result<ApplicationRecord, SessionError> {
        Ok(self.lifecycle.confirm_delete(&mut self.buffer, notifier)?)
    }

    pub fn cancel_delete(&mut self) {
        self.lifecycle.cancel_delete();
    }

    // Save

    pub fn request_save(&mut self) -> SaveRequest {
        self.committer.request(&self.buffer)
    }

    pub fn confirm_save(&mut self, notifier: &mut dyn Notifier) -> Result<Option<SaveReport>, SessionError> {
        let report = self
            .committer
            .confirm(&mut self.buffer, &self.backend, notifier)?;
        if report.is_some() {
            self.load_state = LoadState::Ready;
        }
        Ok(report)
    }

    pub fn cancel_save(&mut self) {
        self.committer.cancel();
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
