use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;

/// The fixed limit table the validator checks against.
///
/// Every field has a default, so a configuration file only needs to name the limits
/// it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub heading_text: usize,
    pub body_text: usize,
    pub caption_text: usize,
    pub caption_warning_percent: usize,
    pub rich_text: usize,
    pub input_label: usize,
    pub helper_text: usize,
    pub embedded_link_text: usize,
    pub navigation_list_items: usize,
    pub components_per_screen: usize,
    pub components_warning_percent: usize,
    pub form_components_per_screen: usize,
    pub embedded_links_per_screen: usize,
    pub footers_per_screen: usize,
    pub screens_per_document: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            heading_text: 80,
            body_text: 4096,
            caption_text: 400,
            caption_warning_percent: 90,
            rich_text: 4096,
            input_label: 40,
            helper_text: 80,
            embedded_link_text: 25,
            navigation_list_items: 20,
            components_per_screen: 50,
            components_warning_percent: 80,
            form_components_per_screen: 20,
            embedded_links_per_screen: 2,
            footers_per_screen: 1,
            screens_per_document: 20,
        }
    }
}

impl Limits {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Caption length above which a warning is raised.
    pub fn caption_warning_threshold(&self) -> usize {
        percent_of(self.caption_text, self.caption_warning_percent)
    }

    /// Component count above which a warning is raised.
    pub fn components_warning_threshold(&self) -> usize {
        percent_of(self.components_per_screen, self.components_warning_percent)
    }
}

/// Saturates instead of overflowing on very large configured limits.
fn percent_of(limit: usize, percent: usize) -> usize {
    limit.saturating_mul(percent) / 100
}
