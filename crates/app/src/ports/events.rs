//! UI event source port: callback registration for clicks and key presses.

use themeswitch_domain::error::ThemeSwitchError;
use themeswitch_domain::shortcut::KeyPress;

/// Delivers page input to registered callbacks.
///
/// Delivery is single-threaded: a callback runs to completion before the next
/// one starts, so callbacks are neither `Send` nor `Sync`.
pub trait UiEventSource {
    /// Call `handler` every time the element `target_id` is clicked.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::ElementNotFound`] if the target does not
    /// exist, or [`ThemeSwitchError::Dom`] if registration fails.
    fn on_click(&self, target_id: &str, handler: Box<dyn FnMut()>)
    -> Result<(), ThemeSwitchError>;

    /// Call `handler` on every key press anywhere in the document.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::Dom`] if registration fails.
    fn on_keydown(&self, handler: Box<dyn FnMut(KeyPress)>) -> Result<(), ThemeSwitchError>;
}
