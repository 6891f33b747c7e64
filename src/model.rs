mod app;
mod config;
mod submission;

pub use self::app::{ApplicationRecord, Enablement, RequiredField, parse_hosts};
pub use self::config::{DEFAULT_ENVIRONMENT, RemoteConfig, WorkspaceConfig};
pub use self::submission::{Decision, SubmissionEvent, parse_timestamp};
