use std::fmt;

use serde::{Deserialize, Serialize};

/// Effective on/off state of an application.
///
/// The wire form carries two redundant fields (`appStatus` and `disabled`);
/// [`ApplicationRecord::enablement`] is the only place that reads them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enablement {
    Enabled,
    Disabled,
}

impl Enablement {
    pub fn as_str(self) -> &'static str {
        match self {
            Enablement::Enabled => "enabled",
            Enablement::Disabled => "disabled",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Enablement::Enabled => Enablement::Disabled,
            Enablement::Disabled => Enablement::Enabled,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Enablement::Enabled
    }

    /// Badge text shown next to an application.
    pub fn label(self) -> &'static str {
        match self {
            Enablement::Enabled => "Active",
            Enablement::Disabled => "Disabled",
        }
    }
}

impl fmt::Display for Enablement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub change_number: String,
    #[serde(default)]
    pub application_owner: String,
    #[serde(default)]
    pub maintenance_window: String,
    #[serde(default)]
    pub change_description: String,
    #[serde(default)]
    pub infrastructure_impact: String,
    #[serde(default)]
    pub hosts: Vec<String>,

    // Older backends only know `disabled`; newer ones send `appStatus`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_status: Option<String>,
}

impl ApplicationRecord {
    /// Template for a new application: every field empty, enabled.
    pub fn blank() -> Self {
        Self::default().with_enablement(Enablement::Enabled)
    }

    pub fn enablement(&self) -> Enablement {
        match self.app_status.as_deref().filter(|s| !s.is_empty()) {
            Some("enabled") => Enablement::Enabled,
            Some(_) => Enablement::Disabled,
            None if self.disabled.unwrap_or(false) => Enablement::Disabled,
            None => Enablement::Enabled,
        }
    }

    /// Sets both enablement fields so they agree.
    pub fn set_enablement(&mut self, state: Enablement) {
        self.app_status = Some(state.as_str().to_string());
        self.disabled = Some(state == Enablement::Disabled);
    }

    pub fn with_enablement(mut self, state: Enablement) -> Self {
        self.set_enablement(state);
        self
    }

    /// Field-by-field equality ignoring the enablement fields.
    pub fn same_content(&self, other: &Self) -> bool {
        let Self {
            app_name,
            change_number,
            application_owner,
            maintenance_window,
            change_description,
            infrastructure_impact,
            hosts,
            disabled: _,
            app_status: _,
        } = self;

        *app_name == other.app_name
            && *change_number == other.change_number
            && *application_owner == other.application_owner
            && *maintenance_window == other.maintenance_window
            && *change_description == other.change_description
            && *infrastructure_impact == other.infrastructure_impact
            && *hosts == other.hosts
    }

    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.app_name.trim().is_empty() {
            missing.push(RequiredField::AppName);
        }
        if self.change_number.trim().is_empty() {
            missing.push(RequiredField::ChangeNumber);
        }
        missing
    }

    pub fn is_savable(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    AppName,
    ChangeNumber,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::AppName => f.write_str("application name"),
            RequiredField::ChangeNumber => f.write_str("change number"),
        }
    }
}

/// Splits free-text host input on newlines and commas, trimming each entry
/// and dropping empty ones. Order is preserved.
pub fn parse_hosts(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "../tests/model/app_tests.rs"]
mod tests;
