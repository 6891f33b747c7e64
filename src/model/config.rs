use serde::{Deserialize, Serialize};

pub const DEFAULT_ENVIRONMENT: &str = "DEV";

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub version: u32,

    #[serde(default)]
    pub remote: Option<RemoteConfig>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            remote: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,

    /// Submissions are shown for this environment only (DEV, TEST, PROD).
    #[serde(default = "default_environment")]
    pub environment: String,
}
