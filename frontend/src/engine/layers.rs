use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::HtmlElement;

use super::dom::set_style;
use super::roster::Role;
use crate::motion::transform::compose;

/// The transform each element last received from the scroll engine. Pointer effects are
/// appended to this base, so they never pile up across events.
#[derive(Default)]
pub struct TransformLayers {
    base: RefCell<HashMap<(Role, usize), String>>,
}

impl TransformLayers {
    pub fn write(&self, role: Role, index: usize, element: &HtmlElement, css: String) {
        set_style(element, "transform", &css);
        self.base.borrow_mut().insert((role, index), css);
    }

    pub fn base(&self, role: Role, index: usize) -> String {
        self.base
            .borrow()
            .get(&(role, index))
            .cloned()
            .unwrap_or_else(|| "none".to_string())
    }

    pub fn overlay(&self, role: Role, index: usize, element: &HtmlElement, extra: &str) {
        set_style(element, "transform", &compose(&self.base(role, index), extra));
    }

    pub fn restore(&self, role: Role, index: usize, element: &HtmlElement) {
        set_style(element, "transform", &self.base(role, index));
    }
}
