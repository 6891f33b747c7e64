//! Confirmation-gated enable/disable and delete.
//!
//! An enablement toggle is written to the backend as soon as it is confirmed.
//! A delete only stages a removal in the working copy; the backend sees it
//! with the next batch save.

use crate::backend::Backend;
use crate::buffer::EditBuffer;
use crate::model::{ApplicationRecord, Enablement};
use crate::notify::Notifier;

mod delete;
mod toggle;

pub use self::delete::{DeletePhase, delete_prompt};
pub use self::toggle::{TogglePhase, ToggleRequest};

#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("no application named {0:?}")]
    NotFound(String),

    #[error("a {0} is already awaiting confirmation")]
    Busy(&'static str),

    #[error("nothing is awaiting confirmation")]
    NothingPending,

    #[error("update application {name:?}: {cause:#}")]
    Backend { name: String, cause: anyhow::Error },
}

#[derive(Debug, Default)]
pub struct LifecycleController {
    toggle: TogglePhase,
    delete: DeletePhase,
}

impl LifecycleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_phase(&self) -> &TogglePhase {
        &self.toggle
    }

    pub fn delete_phase(&self) -> &DeletePhase {
        &self.delete
    }
}

#[cfg(test)]
#[path = "tests/lifecycle_tests.rs"]
mod tests;
