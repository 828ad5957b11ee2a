//! Page element ports: the switch, the root attribute, and element lookup.

use themeswitch_domain::error::ThemeSwitchError;
use themeswitch_domain::theme::Theme;

/// The switch element exposing a boolean `checked` flag.
pub trait ToggleControl {
    /// Current `checked` value.
    fn is_checked(&self) -> bool;

    /// Overwrite the `checked` value.
    fn set_checked(&mut self, checked: bool);
}

/// The theme marker on the document root, read by the page stylesheet.
pub trait ThemeAttribute {
    /// Write the theme value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::Dom`] if the host rejects the write.
    fn write(&mut self, theme: Theme) -> Result<(), ThemeSwitchError>;
}

/// Finds page-owned elements by identifier.
pub trait ElementLookup {
    /// Handle type for the switch.
    type Control: ToggleControl;

    /// Look up the switch.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::ElementNotFound`] when no element has `id`.
    fn toggle_control(&self, id: &str) -> Result<Self::Control, ThemeSwitchError>;
}

/// The operating environment's default theme, as reported by the host page.
pub trait SystemPreference {
    /// Whether the system is set to dark.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::MissingSystemPreference`] when the host
    /// did not provide the value.
    fn prefers_dark(&self) -> Result<bool, ThemeSwitchError>;
}

impl SystemPreference for bool {
    fn prefers_dark(&self) -> Result<bool, ThemeSwitchError> {
        Ok(*self)
    }
}
