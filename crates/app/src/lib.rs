//! # themeswitch-app
//!
//! Application layer: the theme toggling use-case and **port definitions**.
//!
//! ## Responsibilities
//! - Define **port traits** that the page adapter implements:
//!   - `ToggleControl`: the switch with a boolean `checked` flag
//!   - `ThemeAttribute`: the theme marker on the document root
//!   - `ElementLookup`: find the switch by identifier
//!   - `SystemPreference`: the host-provided dark-mode default
//!   - `UiEventSource`: register click and keydown callbacks
//! - Provide the `ThemeToggler` use-case that keeps the switch and the root
//!   attribute in sync
//! - Wire the toggler to an event source with single-threaded shared ownership
//!
//! ## Dependency rule
//! Depends on `themeswitch-domain` only. Never imports adapter crates.

pub mod config;
pub mod ports;
pub mod toggler;
pub mod wiring;

#[cfg(test)]
pub(crate) mod testing;
