//! Theme toggler: keeps the switch and the root theme attribute in sync.

use themeswitch_domain::error::ThemeSwitchError;
use themeswitch_domain::event::UiEvent;
use themeswitch_domain::shortcut::{KeyPress, Shortcut};
use themeswitch_domain::theme::Theme;

use crate::config::TogglerConfig;
use crate::ports::{ElementLookup, SystemPreference, ThemeAttribute, ToggleControl};

/// Owns the switch handle and the root attribute for the page session.
///
/// After every toggle, `control.is_checked()` holds exactly when the root
/// attribute is `"dark"`.
pub struct ThemeToggler<C, A> {
    control: C,
    attribute: A,
    shortcut: Shortcut,
}

impl<C: ToggleControl, A: ThemeAttribute> ThemeToggler<C, A> {
    /// Build a toggler from handles that were already resolved.
    pub fn new(control: C, attribute: A, shortcut: Shortcut) -> Self {
        Self {
            control,
            attribute,
            shortcut,
        }
    }

    /// Look up the switch and reflect the system preference on it.
    ///
    /// A dark preference checks the switch. The root attribute is only
    /// written when [`TogglerConfig::sync_attribute_on_load`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::ElementNotFound`] if the switch is absent,
    /// [`ThemeSwitchError::MissingSystemPreference`] if the host did not
    /// provide the preference, or a DOM error from the attribute write.
    pub fn initialize<L, P>(
        lookup: &L,
        attribute: A,
        preference: &P,
        config: &TogglerConfig,
    ) -> Result<Self, ThemeSwitchError>
    where
        L: ElementLookup<Control = C>,
        P: SystemPreference + ?Sized,
    {
        let control = lookup.toggle_control(&config.switcher_id)?;
        let mut toggler = Self::new(control, attribute, config.shortcut.clone());

        if preference.prefers_dark()? {
            toggler.control.set_checked(true);
        }
        tracing::debug!(
            checked = toggler.control.is_checked(),
            "theme switch initialized"
        );

        if config.sync_attribute_on_load {
            toggler.apply_theme(toggler.control.is_checked())?;
        }
        Ok(toggler)
    }

    /// Dispatch a UI event.
    ///
    /// Returns the newly applied theme, or `None` when the event was ignored.
    ///
    /// # Errors
    ///
    /// Returns a DOM error if the attribute write fails.
    pub fn handle(&mut self, event: &UiEvent) -> Result<Option<Theme>, ThemeSwitchError> {
        match event {
            UiEvent::Click => self.handle_click().map(Some),
            UiEvent::KeyDown(press) => self.handle_keydown(press),
        }
    }

    /// Flip the switch and apply the matching theme.
    ///
    /// # Errors
    ///
    /// Returns a DOM error if the attribute write fails.
    pub fn handle_click(&mut self) -> Result<Theme, ThemeSwitchError> {
        self.toggle()
    }

    /// Flip the switch when the key press matches the shortcut.
    ///
    /// # Errors
    ///
    /// Returns a DOM error if the attribute write fails.
    pub fn handle_keydown(&mut self, press: &KeyPress) -> Result<Option<Theme>, ThemeSwitchError> {
        if !self.shortcut.matches(press) {
            return Ok(None);
        }
        self.toggle().map(Some)
    }

    /// Write `"dark"` when `is_checked`, `"light"` otherwise.
    ///
    /// # Errors
    ///
    /// Returns a DOM error if the attribute write fails.
    pub fn apply_theme(&mut self, is_checked: bool) -> Result<Theme, ThemeSwitchError> {
        let theme = Theme::from_checked(is_checked);
        self.attribute.write(theme)?;
        Ok(theme)
    }

    /// Theme implied by the switch position.
    #[must_use]
    pub fn current(&self) -> Theme {
        Theme::from_checked(self.control.is_checked())
    }

    /// The switch handle.
    pub fn control(&self) -> &C {
        &self.control
    }

    /// The root attribute handle.
    pub fn attribute(&self) -> &A {
        &self.attribute
    }

    fn toggle(&mut self) -> Result<Theme, ThemeSwitchError> {
        let checked = !self.control.is_checked();
        self.control.set_checked(checked);
        let theme = self.apply_theme(checked)?;
        tracing::debug!(%theme, "theme toggled");
        Ok(theme)
    }
}
