//! Thin conversions between browser objects and the pure motion types.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, NodeList, Window};

use crate::motion::geometry::{Rect, Viewport};

pub fn viewport(window: &Window) -> Viewport {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    Viewport::new(scroll_y, width, height)
}

pub fn rect(element: &Element) -> Rect {
    let bounds = element.get_bounding_client_rect();
    Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height())
}

/// Sets one inline style property; a failed write only costs that effect.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("failed to set {} to {:?}: {:?}", property, value, err);
    }
}

pub fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn select_all(document: &web_sys::Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(html_elements(document.query_selector_all(selector)?))
}

pub fn select_one(document: &web_sys::Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// Position of an element among its parent's element children.
pub fn sibling_index(element: &Element) -> usize {
    let mut index = 0;
    let mut current = element.previous_element_sibling();
    while let Some(sibling) = current {
        index += 1;
        current = sibling.previous_element_sibling();
    }
    index
}
