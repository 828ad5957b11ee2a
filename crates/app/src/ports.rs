//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the toggler and the host page. They are
//! defined here (in `app`) so that both the use-case layer and the adapter
//! layer can depend on them without creating circular dependencies.

pub mod dom;
pub mod events;

pub use dom::{ElementLookup, SystemPreference, ThemeAttribute, ToggleControl};
pub use events::UiEventSource;
