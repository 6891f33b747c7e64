use super::*;

/// A pending enable/disable, as presented to the operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleRequest {
    pub app_name: String,
    pub target: Enablement,
}

impl ToggleRequest {
    pub fn title(&self) -> &'static str {
        match self.target {
            Enablement::Enabled => "Enable Application",
            Enablement::Disabled => "Disable Application",
        }
    }

    pub fn prompt(&self) -> String {
        let verb = match self.target {
            Enablement::Enabled => "enable",
            Enablement::Disabled => "disable",
        };
        let mut prompt = format!(
            "Are you sure you want to {} the application \"{}\"?",
            verb, self.app_name
        );
        if self.target == Enablement::Disabled {
            prompt.push_str(" This will stop the application from running.");
        }
        prompt
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TogglePhase {
    #[default]
    Idle,
    ConfirmPending(ToggleRequest),
}

impl TogglePhase {
    pub fn label(&self) -> &'static str {
        match self {
            TogglePhase::Idle => "idle",
            TogglePhase::ConfirmPending(_) => "confirm_pending",
        }
    }
}

impl LifecycleController {
    /// Computes the opposite of the record's current enablement and waits for
    /// confirmation.
    pub fn request_toggle(
        &mut self,
        buffer: &EditBuffer,
        name: &str,
    ) -> Result<ToggleRequest, LifecycleError> {
        if self.toggle != TogglePhase::Idle {
            return Err(LifecycleError::Busy("status change"));
        }
        let record = buffer
            .get(name)
            .ok_or_else(|| LifecycleError::NotFound(name.to_string()))?;

        let req = ToggleRequest {
            app_name: name.to_string(),
            target: record.enablement().toggled(),
        };
        self.toggle = TogglePhase::ConfirmPending(req.clone());
        Ok(req)
    }

    pub fn cancel_toggle(&mut self) {
        if matches!(self.toggle, TogglePhase::ConfirmPending(_)) {
            self.toggle = TogglePhase::Idle;
        }
    }

    /// Writes the working record, with both enablement fields set to the
    /// target, to the backend. On success both the working and baseline copies
    /// take the new state; on failure neither changes.
    pub fn confirm_toggle(
        &mut self,
        buffer: &mut EditBuffer,
        backend: &dyn Backend,
        notifier: &mut dyn Notifier,
    ) -> Result<Enablement, LifecycleError> {
        let req = match std::mem::take(&mut self.toggle) {
            TogglePhase::ConfirmPending(req) => req,
            other => {
                self.toggle = other;
                return Err(LifecycleError::NothingPending);
            }
        };

        let Some(record) = buffer.get(&req.app_name) else {
            return Err(LifecycleError::NotFound(req.app_name));
        };
        let payload: ApplicationRecord = record.clone().with_enablement(req.target);

        match backend.update_app(&req.app_name, &payload) {
            Ok(_) => {
                buffer.settle_enablement(&req.app_name, req.target);
                notifier.success(
                    "Success",
                    &format!("Application {} successfully", req.target),
                );
                Ok(req.target)
            }
            Err(cause) => {
                notifier.error("Update Failed", "Failed to update application status.");
                Err(LifecycleError::Backend {
                    name: req.app_name,
                    cause,
                })
            }
        }
    }
}
