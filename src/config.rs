//! Synchronizer configuration.
//!
//! Every field defaults to the site's built-in contract (see [`crate::consts`]).
//! Pages may override any subset through an inline JSON block; unknown fields
//! are rejected so typos surface in the console instead of silently doing
//! nothing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::ConfigError;
use crate::host;

/// Storage keys, DOM hooks, and layout threshold used by the synchronizer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    pub theme_key: String,
    pub sidebar_key: String,
    pub theme_attribute: String,
    pub collapsed_class: String,
    pub active_link_class: String,
    pub nav_link_selector: String,
    pub sidebar_selector: String,
    pub theme_switch_id: String,
    pub sidebar_toggle_id: String,
    pub year_id: String,
    /// Minimum viewport width in CSS pixels at which collapse is honored.
    pub breakpoint_px: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            theme_key: consts::THEME_KEY.to_owned(),
            sidebar_key: consts::SIDEBAR_KEY.to_owned(),
            theme_attribute: consts::THEME_ATTRIBUTE.to_owned(),
            collapsed_class: consts::COLLAPSED_CLASS.to_owned(),
            active_link_class: consts::ACTIVE_LINK_CLASS.to_owned(),
            nav_link_selector: consts::NAV_LINK_SELECTOR.to_owned(),
            sidebar_selector: consts::SIDEBAR_SELECTOR.to_owned(),
            theme_switch_id: consts::THEME_SWITCH_ID.to_owned(),
            sidebar_toggle_id: consts::SIDEBAR_TOGGLE_ID.to_owned(),
            year_id: consts::YEAR_ID.to_owned(),
            breakpoint_px: consts::SIDEBAR_BREAKPOINT_PX,
        }
    }
}

impl SyncConfig {
    /// Parse a JSON override block and validate the result.
    ///
    /// Absent fields keep their defaults; an empty object yields `SyncConfig::default()`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the synchronizer silently inert.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("theme_key", &self.theme_key),
            ("sidebar_key", &self.sidebar_key),
            ("theme_attribute", &self.theme_attribute),
            ("collapsed_class", &self.collapsed_class),
            ("active_link_class", &self.active_link_class),
            ("nav_link_selector", &self.nav_link_selector),
            ("sidebar_selector", &self.sidebar_selector),
            ("theme_switch_id", &self.theme_switch_id),
            ("sidebar_toggle_id", &self.sidebar_toggle_id),
            ("year_id", &self.year_id),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Invalid { field, reason: "must not be empty" });
        }
        if self.theme_switch_id == self.sidebar_toggle_id {
            return Err(ConfigError::Invalid { field: "sidebar_toggle_id", reason: "must differ from theme_switch_id" });
        }
        if self.breakpoint_px == 0 {
            return Err(ConfigError::Invalid { field: "breakpoint_px", reason: "must be positive" });
        }
        Ok(())
    }

    /// Media query matching viewports wide enough to collapse the sidebar.
    #[must_use]
    pub fn breakpoint_query(&self) -> String {
        host::min_width_query(self.breakpoint_px)
    }
}
