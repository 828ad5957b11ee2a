//! UI events delivered by the page to the theme switch.

use crate::shortcut::KeyPress;

/// Input the theme switch reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The click target was activated.
    Click,
    /// A key went down anywhere in the document.
    KeyDown(KeyPress),
}
