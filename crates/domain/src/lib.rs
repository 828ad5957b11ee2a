//! # themeswitch-domain
//!
//! Pure domain model for the light/dark theme switch.
//!
//! ## Responsibilities
//! - Define the [`Theme`](theme::Theme) value and its mapping from the
//!   toggle control's `checked` flag
//! - Define keyboard input ([`KeyPress`](shortcut::KeyPress)) and the
//!   [`Shortcut`](shortcut::Shortcut) that toggles the theme
//! - Define the [`UiEvent`](event::UiEvent) messages delivered by the page
//! - Define the error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod event;
pub mod shortcut;
pub mod theme;
