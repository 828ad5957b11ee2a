//! Keyboard input and the shortcut that toggles the theme.

use serde::{Deserialize, Serialize};

/// The part of a keyboard event the theme switch looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Value of `KeyboardEvent.key` (already shifted, e.g. `"D"`).
    pub key: String,
    /// Whether Shift was held.
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, shift: bool) -> Self {
        Self {
            key: key.into(),
            shift,
        }
    }
}

/// A Shift + key combination.
///
/// The key comparison is case-sensitive: with Shift held the browser reports
/// the uppercase letter, so the default shortcut matches `"D"` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shortcut {
    /// Expected `KeyboardEvent.key`.
    pub key: String,
    /// Whether Shift must be held.
    pub shift: bool,
}

impl Default for Shortcut {
    fn default() -> Self {
        Self {
            key: "D".to_string(),
            shift: true,
        }
    }
}

impl Shortcut {
    /// Whether the key press triggers this shortcut.
    #[must_use]
    pub fn matches(&self, press: &KeyPress) -> bool {
        press.shift == self.shift && press.key == self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_shift_and_uppercase_d() {
        assert!(Shortcut::default().matches(&KeyPress::new("D", true)));
    }

    #[test]
    fn should_not_match_d_without_shift() {
        assert!(!Shortcut::default().matches(&KeyPress::new("D", false)));
        assert!(!Shortcut::default().matches(&KeyPress::new("d", false)));
    }

    #[test]
    fn should_not_match_lowercase_d_with_shift() {
        assert!(!Shortcut::default().matches(&KeyPress::new("d", true)));
    }

    #[test]
    fn should_not_match_other_keys_with_shift() {
        for key in ["E", "Shift", "Enter", "L"] {
            assert!(!Shortcut::default().matches(&KeyPress::new(key, true)));
        }
    }

    #[test]
    fn should_parse_custom_shortcut_with_defaults() {
        let shortcut: Shortcut = serde_json::from_str(r#"{"key":"T"}"#).unwrap();
        assert_eq!(shortcut.key, "T");
        assert!(shortcut.shift);
    }
}
