use std::rc::Rc;

use log::info;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use super::layers::TransformLayers;
use super::pointer::PointerInteractionEngine;
use super::roster::ElementRoster;
use super::scroll::ScrollVisualEngine;

/// Both visual engines for one page view. The scroll engine is attached first so pointer
/// effects compose onto its output; fields drop in the reverse order.
pub struct PageEffects {
    pointer: PointerInteractionEngine,
    scroll: ScrollVisualEngine,
}

impl PageEffects {
    pub fn attach(window: &Window, document: &Document) -> Result<Self, JsValue> {
        let roster = Rc::new(ElementRoster::bind(document)?);
        let layers = Rc::new(TransformLayers::default());
        let scroll = ScrollVisualEngine::attach(window, document, roster.clone(), layers.clone())?;
        let pointer = PointerInteractionEngine::attach(window, document, roster, layers)?;
        info!("page effects attached");
        Ok(Self { pointer, scroll })
    }

    pub fn scroll(&self) -> &ScrollVisualEngine {
        &self.scroll
    }
}
