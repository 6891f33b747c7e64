//! The persistence backend as seen by the admin core.

use anyhow::Result;

use crate::model::{ApplicationRecord, SubmissionEvent};

/// Operations the core consumes from the application store.
///
/// Every call either fully succeeds or reports an error; the core never
/// assumes partial application of a failed call.
pub trait Backend {
    /// Full current application list.
    fn load_apps(&self) -> Result<Vec<ApplicationRecord>>;

    /// Replace-all persist of the application list.
    fn update_submission_config(&self, apps: &[ApplicationRecord]) -> Result<()>;

    /// Overwrite a single application by name.
    fn update_app(&self, name: &str, record: &ApplicationRecord) -> Result<ApplicationRecord>;

    fn delete_app(&self, name: &str) -> Result<()>;

    /// Full submission history across every environment.
    fn load_submissions(&self) -> Result<Vec<SubmissionEvent>>;
}
