use super::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeletePhase {
    #[default]
    Idle,
    ConfirmPending(String),
}

impl DeletePhase {
    pub fn label(&self) -> &'static str {
        match self {
            DeletePhase::Idle => "idle",
            DeletePhase::ConfirmPending(_) => "confirm_pending",
        }
    }
}

pub fn delete_prompt(name: &str) -> String {
    format!(
        "Are you sure you want to delete the application \"{}\"? The deletion is applied with the next save.",
        name
    )
}

impl LifecycleController {
    pub fn request_delete(&mut self, buffer: &EditBuffer, name: &str) -> Result<(), LifecycleError> {
        if self.delete != DeletePhase::Idle {
            return Err(LifecycleError::Busy("delete"));
        }
        if buffer.get(name).is_none() {
            return Err(LifecycleError::NotFound(name.to_string()));
        }
        self.delete = DeletePhase::ConfirmPending(name.to_string());
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.delete = DeletePhase::Idle;
    }

    /// Removes the record from the working copy. The backend is not called;
    /// the removal is realized by the next batch save.
    pub fn confirm_delete(
        &mut self,
        buffer: &mut EditBuffer,
        notifier: &mut dyn Notifier,
    ) -> Result<ApplicationRecord, LifecycleError> {
        let DeletePhase::ConfirmPending(name) = std::mem::take(&mut self.delete) else {
            return Err(LifecycleError::NothingPending);
        };
        let removed = buffer
            .remove(&name)
            .map_err(|_| LifecycleError::NotFound(name.clone()))?;
        notifier.success(
            "Success",
            &format!(
                "Application {} deleted. Save changes to apply the deletion.",
                name
            ),
        );
        Ok(removed)
    }
}
