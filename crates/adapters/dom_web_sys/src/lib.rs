//! # themeswitch-adapter-dom
//!
//! Browser adapter built on [web-sys](https://docs.rs/web-sys).
//!
//! ## Responsibilities
//! - Implement the `themeswitch-app` ports against the live DOM
//! - Read the `isSystemThemeSetToDark` global provided by the host page
//! - Export the wasm `start` entry point, which wires the switch on load
//!
//! Built for `wasm32-unknown-unknown`; excluded from the native workspace.

use std::cell::RefCell;
use std::error::Error;

use themeswitch_app::config::TogglerConfig;
use themeswitch_app::wiring;
use themeswitch_domain::error::{DomError, ThemeSwitchError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod elements;
mod events;
mod preference;

pub use elements::{DomLookup, DomToggleControl, RootDataset};
pub use events::DomEventSource;
pub use preference::HostGlobal;

/// Name of the global the host page defines before loading the module.
pub const SYSTEM_PREFERENCE_GLOBAL: &str = "isSystemThemeSetToDark";

thread_local! {
    static INSTALLED: RefCell<Option<DomEventSource>> = const { RefCell::new(None) };
}

/// Wire the theme switch with the default page identifiers.
///
/// Runs once when the module is instantiated. An error aborts wiring and is
/// reported in the browser console.
///
/// # Errors
///
/// Fails if the document, the switch, the click target, or the system
/// preference global is missing.
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    install(&TogglerConfig::default()).map_err(|err| JsValue::from_str(&describe(&err)))
}

/// Detach the listeners registered by [`start`].
#[wasm_bindgen]
pub fn stop() {
    INSTALLED.with(|installed| installed.borrow_mut().take());
}

/// Wire the theme switch against the current document.
///
/// # Errors
///
/// See [`start`].
pub fn install(config: &TogglerConfig) -> Result<(), ThemeSwitchError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DomError {
            operation: "document",
            reason: "no global document".to_string(),
        })?;
    let root = document
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| DomError {
            operation: "document_element",
            reason: "root is not an html element".to_string(),
        })?;

    let lookup = DomLookup::new(document.clone());
    let attribute = RootDataset::new(root, config.dataset_key.clone());
    let preference = HostGlobal::new(SYSTEM_PREFERENCE_GLOBAL);
    let source = DomEventSource::new(document);

    wiring::install(&lookup, attribute, &preference, &source, config)?;
    INSTALLED.with(|installed| installed.borrow_mut().replace(source));
    Ok(())
}

/// Render an error with its whole `source()` chain, so the console names
/// the missing element or global.
pub(crate) fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Convert a rejected DOM call into a [`DomError`].
pub(crate) fn dom_error(operation: &'static str, value: &JsValue) -> ThemeSwitchError {
    let reason = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    DomError { operation, reason }.into()
}
