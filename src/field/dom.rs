use dioxus::prelude::*;

use super::{FieldHandle, SELECTION_END};

/// The rendered `<input>`.
///
/// The value lives in a signal bound to the element's `value` attribute. Focus,
/// selection and clipboard access go through small scripts addressed by the
/// element id.
#[derive(Clone)]
pub struct DomField {
    element_id: String,
    value: Signal<String>,
}

impl DomField {
    pub fn new(element_id: impl Into<String>, value: Signal<String>) -> Self {
        Self { element_id: element_id.into(), value }
    }

    fn run(&self, body: &str) {
        // The id is sanitized, so Debug formatting yields a valid JS string.
        let script = format!(
            "const el = document.getElementById({:?}); if (el) {{ {body} }}",
            self.element_id
        );
        let _ = document::eval(&script);
    }
}

impl FieldHandle for DomField {
    fn value(&self) -> String {
        self.value.cloned()
    }

    fn set_value(&mut self, value: String) {
        self.value.set(value);
    }

    fn focus(&mut self) {
        self.run("el.focus();");
    }

    fn blur(&mut self) {
        self.run("el.blur();");
    }

    fn select_all(&mut self) {
        self.run(&format!("el.select(); el.setSelectionRange(0, {SELECTION_END});"));
    }

    fn copy_selection(&mut self) {
        self.run("document.execCommand(\"copy\");");
    }
}
