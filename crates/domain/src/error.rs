//! Common error types used across the workspace.
//!
//! Each failure has its own typed error; [`ThemeSwitchError`] gathers them
//! and every layer converts into it via `#[from]`.

/// A required page element could not be found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("element #{id} not found")]
pub struct ElementNotFoundError {
    /// Identifier that was looked up.
    pub id: String,
}

impl ElementNotFoundError {
    /// Build the error for the given element identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// The host page did not provide the system theme preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("global `{name}` is not defined")]
pub struct MissingPreferenceError {
    /// Name of the global that was read.
    pub name: &'static str,
}

/// The host rejected a DOM operation (attribute write, listener registration).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dom operation `{operation}` failed: {reason}")]
pub struct DomError {
    /// Short name of the failed operation.
    pub operation: &'static str,
    /// Host-provided description.
    pub reason: String,
}

/// Top-level error for the theme switch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeSwitchError {
    #[error("element not found")]
    ElementNotFound(#[from] ElementNotFoundError),

    #[error("missing system theme preference")]
    MissingSystemPreference(#[from] MissingPreferenceError),

    #[error("dom error")]
    Dom(#[from] DomError),
}
