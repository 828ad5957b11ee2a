//! DOM-backed switch, root attribute, and element lookup.

use themeswitch_app::ports::{ElementLookup, ThemeAttribute, ToggleControl};
use themeswitch_domain::error::{DomError, ElementNotFoundError, ThemeSwitchError};
use themeswitch_domain::theme::Theme;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::dom_error;

/// Resolves elements with `document.getElementById`.
pub struct DomLookup {
    document: Document,
}

impl DomLookup {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ElementLookup for DomLookup {
    type Control = DomToggleControl;

    fn toggle_control(&self, id: &str) -> Result<DomToggleControl, ThemeSwitchError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| ElementNotFoundError::new(id))?;
        let input = element.dyn_into::<HtmlInputElement>().map_err(|_| DomError {
            operation: "toggle_control",
            reason: format!("#{id} is not an input element"),
        })?;
        Ok(DomToggleControl(input))
    }
}

/// Checkbox-style `<input>` acting as the switch.
pub struct DomToggleControl(HtmlInputElement);

impl ToggleControl for DomToggleControl {
    fn is_checked(&self) -> bool {
        self.0.checked()
    }

    fn set_checked(&mut self, checked: bool) {
        self.0.set_checked(checked);
    }
}

/// `dataset` entry on `<html>` holding the theme.
pub struct RootDataset {
    root: HtmlElement,
    key: String,
}

impl RootDataset {
    /// `key` is camel-cased, so `mdbTheme` renders as `data-mdb-theme`.
    pub fn new(root: HtmlElement, key: String) -> Self {
        Self { root, key }
    }
}

impl ThemeAttribute for RootDataset {
    fn write(&mut self, theme: Theme) -> Result<(), ThemeSwitchError> {
        self.root
            .dataset()
            .set(&self.key, theme.as_str())
            .map_err(|err| dom_error("set_dataset", &err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn mount(tag: &str, id: &str) -> Element {
        let document = document();
        let element = document.create_element(tag).unwrap();
        element.set_id(id);
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn should_resolve_input_and_track_checked_flag() {
        let element = mount("input", "lookupSwitch");
        let input = element.clone().dyn_into::<HtmlInputElement>().unwrap();
        input.set_type("checkbox");

        let mut control = DomLookup::new(document())
            .toggle_control("lookupSwitch")
            .unwrap();
        assert!(!control.is_checked());
        control.set_checked(true);
        assert!(input.checked());
        element.remove();
    }

    #[wasm_bindgen_test]
    fn should_report_missing_switch_by_id() {
        let result = DomLookup::new(document()).toggle_control("lookupMissing");
        assert!(matches!(
            result,
            Err(ThemeSwitchError::ElementNotFound(ElementNotFoundError { ref id })) if id == "lookupMissing"
        ));
    }

    #[wasm_bindgen_test]
    fn should_reject_switch_that_is_not_an_input() {
        let element = mount("div", "lookupDiv");
        let result = DomLookup::new(document()).toggle_control("lookupDiv");
        assert!(matches!(result, Err(ThemeSwitchError::Dom(_))));
        element.remove();
    }

    #[wasm_bindgen_test]
    fn should_render_camel_case_key_as_data_attribute() {
        let element = mount("div", "datasetRoot");
        let root = element.clone().dyn_into::<HtmlElement>().unwrap();
        let mut dataset = RootDataset::new(root, "mdbTheme".to_string());

        dataset.write(Theme::Dark).unwrap();
        assert_eq!(
            element.get_attribute("data-mdb-theme").as_deref(),
            Some("dark")
        );
        dataset.write(Theme::Light).unwrap();
        assert_eq!(
            element.get_attribute("data-mdb-theme").as_deref(),
            Some("light")
        );
        element.remove();
    }
}
