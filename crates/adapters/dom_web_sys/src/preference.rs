//! System preference read from a global defined by the host page.

use themeswitch_app::ports::SystemPreference;
use themeswitch_domain::error::{MissingPreferenceError, ThemeSwitchError};
use wasm_bindgen::JsValue;

/// Global on `globalThis`, read with JavaScript truthiness.
///
/// The global must be declared (`var`, or assigned on `window`); any value
/// it holds counts, so `1` means dark and `null` or `undefined` mean light.
/// Top-level `let`/`const` bindings are not properties of `globalThis` and
/// are reported as missing.
pub struct HostGlobal {
    name: &'static str,
}

impl HostGlobal {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl SystemPreference for HostGlobal {
    fn prefers_dark(&self) -> Result<bool, ThemeSwitchError> {
        let global = js_sys::global();
        let key = JsValue::from_str(self.name);
        if !js_sys::Reflect::has(&global, &key).unwrap_or(false) {
            return Err(MissingPreferenceError { name: self.name }.into());
        }
        js_sys::Reflect::get(&global, &key)
            .map(|value| value.is_truthy())
            .map_err(|_| MissingPreferenceError { name: self.name }.into())
    }
}
