//! Toggler configuration: element identifiers, dataset key, shortcut.
//!
//! Every field has a default matching the markup the page ships with, so an
//! empty configuration is valid.

use serde::Deserialize;
use themeswitch_domain::shortcut::Shortcut;

/// Identifier of the switch element.
pub const DEFAULT_SWITCHER_ID: &str = "themingSwitcher";
/// Identifier of the element whose click toggles the theme.
pub const DEFAULT_CLICK_TARGET_ID: &str = "darkModeItem";
/// `dataset` key on `<html>`, rendered as `data-mdb-theme`.
pub const DEFAULT_DATASET_KEY: &str = "mdbTheme";

/// Settings for [`ThemeToggler`](crate::toggler::ThemeToggler).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TogglerConfig {
    /// Identifier of the switch element.
    pub switcher_id: String,
    /// Identifier of the click target.
    pub click_target_id: String,
    /// Camel-cased `dataset` key written on the document root.
    pub dataset_key: String,
    /// Keyboard shortcut toggling the theme.
    pub shortcut: Shortcut,
    /// Also write the root attribute during initialisation.
    ///
    /// Off by default: on load only the switch reflects the system
    /// preference and the attribute stays unset until the first toggle.
    pub sync_attribute_on_load: bool,
}

impl Default for TogglerConfig {
    fn default() -> Self {
        Self {
            switcher_id: DEFAULT_SWITCHER_ID.to_string(),
            click_target_id: DEFAULT_CLICK_TARGET_ID.to_string(),
            dataset_key: DEFAULT_DATASET_KEY.to_string(),
            shortcut: Shortcut::default(),
            sync_attribute_on_load: false,
        }
    }
}
