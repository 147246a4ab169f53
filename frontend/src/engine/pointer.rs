use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use super::dom::{self, set_style};
use super::layers::TransformLayers;
use super::listener::Listener;
use super::roster::{ElementRoster, Role};
use super::timers::TimerSet;
use crate::motion::pointer::{
    card_repulsion, hero_layer_offset, hover_item_delay_ms, section_shift, section_shift_css,
    HoverEmphasis, RippleGeometry, Tilt, PRESS_RELEASE_MS, PRESS_SCALE, RIPPLE_LIFETIME_MS,
};
use crate::motion::transform::translate_css;

fn pointer_of(event: &web_sys::Event) -> Option<(f64, f64)> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| (mouse.client_x() as f64, mouse.client_y() as f64))
}

struct PointerShared {
    window: Window,
    document: Document,
    roster: Rc<ElementRoster>,
    layers: Rc<TransformLayers>,
    timers: TimerSet,
}

impl PointerShared {
    fn on_pointer_move(&self, pointer: (f64, f64)) {
        let viewport = dom::viewport(&self.window);
        for (index, layer) in self.roster.all(Role::HeroLayer).iter().enumerate() {
            let (x, y) = hero_layer_offset(pointer, viewport, index);
            self.layers.overlay(Role::HeroLayer, index, layer, &translate_css(x, y));
        }
        for (index, card) in self.roster.all(Role::FloatingCard).iter().enumerate() {
            match card_repulsion(pointer, dom::rect(card)) {
                Some((x, y)) => self.layers.overlay(Role::FloatingCard, index, card, &translate_css(x, y)),
                None => self.layers.restore(Role::FloatingCard, index, card),
            }
        }
    }

    fn on_button_click(&self, button: &HtmlElement, pointer: (f64, f64)) {
        let bounds = dom::rect(button);
        let geometry = RippleGeometry::at(
            (pointer.0 - bounds.left, pointer.1 - bounds.top),
            (bounds.width, bounds.height),
        );

        let ripple = match self
            .document
            .create_element("span")
            .and_then(|element| element.dyn_into::<HtmlElement>().map_err(JsValue::from))
        {
            Ok(ripple) => ripple,
            Err(err) => {
                warn!("failed to create ripple: {:?}", err);
                return;
            }
        };
        ripple.style().set_css_text(&geometry.css());
        set_style(button, "position", "relative");
        set_style(button, "overflow", "hidden");
        if let Err(err) = button.append_child(&ripple) {
            warn!("failed to attach ripple: {:?}", err);
            return;
        }

        set_style(button, "transform", &format!("scale({})", PRESS_SCALE));
        let pressed = button.clone();
        self.timers.schedule(PRESS_RELEASE_MS, move || {
            if pressed.is_connected() {
                set_style(&pressed, "transform", "scale(1)");
            }
        });
        self.timers.schedule(RIPPLE_LIFETIME_MS, move || {
            if ripple.is_connected() {
                ripple.remove();
            }
        });
    }
}

fn emphasize(card: &HtmlElement, emphasis: HoverEmphasis, nudges: &TimerSet) {
    set_style(card, "transform", &emphasis.transform_css());
    set_style(card, "box-shadow", emphasis.shadow);
    set_style(card, "filter", &emphasis.filter_css());

    nudges.cancel_all();
    let items = match card.query_selector_all(".menu-item") {
        Ok(items) => dom::html_elements(items),
        Err(err) => {
            warn!("failed to query card items: {:?}", err);
            return;
        }
    };
    let nudge = format!("translateX({}px)", emphasis.item_nudge_px());
    for (index, item) in items.into_iter().enumerate() {
        if emphasis == HoverEmphasis::RESTING {
            set_style(&item, "transform", &nudge);
            continue;
        }
        let nudge = nudge.clone();
        nudges.schedule(hover_item_delay_ms(index), move || {
            if item.is_connected() {
                set_style(&item, "transform", &nudge);
            }
        });
    }
}

/// Pointer effects layered over the scroll motion: hero and card parallax, section
/// background drift, contact tilt, card hover and button ripples.
pub struct PointerInteractionEngine {
    _listeners: Vec<Listener>,
    shared: Rc<PointerShared>,
}

impl PointerInteractionEngine {
    pub fn attach(
        window: &Window,
        document: &Document,
        roster: Rc<ElementRoster>,
        layers: Rc<TransformLayers>,
    ) -> Result<Self, JsValue> {
        let shared = Rc::new(PointerShared {
            window: window.clone(),
            document: document.clone(),
            roster,
            layers,
            timers: TimerSet::new(),
        });
        let mut listeners = Vec::new();

        {
            let shared = shared.clone();
            listeners.push(Listener::new(document, "mousemove", move |event| {
                if let Some(pointer) = pointer_of(&event) {
                    shared.on_pointer_move(pointer);
                }
            })?);
        }

        for (section, _) in shared.roster.backdrops() {
            let target = section.clone();
            listeners.push(Listener::new(section, "mousemove", move |event| {
                if let Some(pointer) = pointer_of(&event) {
                    let shift = section_shift(pointer, dom::rect(&target));
                    set_style(&target, "background-position", &section_shift_css(shift));
                }
            })?);
            let target = section.clone();
            listeners.push(Listener::new(section, "mouseleave", move |_| {
                set_style(&target, "background-position", "center center");
            })?);
        }

        for item in shared.roster.all(Role::ContactItem) {
            let target = item.clone();
            listeners.push(Listener::new(item, "mousemove", move |event| {
                let Some(pointer) = pointer_of(&event) else {
                    return;
                };
                let bounds = dom::rect(&target);
                let tilt = Tilt::toward(
                    (pointer.0 - bounds.left, pointer.1 - bounds.top),
                    (bounds.width, bounds.height),
                );
                set_style(&target, "transform", &tilt.css());
                set_style(&target, "box-shadow", "0 15px 30px rgba(0, 0, 0, 0.2)");
            })?);
            let target = item.clone();
            listeners.push(Listener::new(item, "mouseleave", move |_| {
                set_style(&target, "transform", &Tilt::NEUTRAL.css());
                set_style(&target, "box-shadow", "var(--shadow-sm)");
            })?);
        }

        for card in shared.roster.all(Role::HoverCard) {
            let nudges = TimerSet::new();
            for (event, emphasis) in [
                ("mouseenter", HoverEmphasis::RAISED),
                ("mouseleave", HoverEmphasis::RESTING),
            ] {
                let target = card.clone();
                let nudges = nudges.clone();
                listeners.push(Listener::new(card, event, move |_| {
                    emphasize(&target, emphasis, &nudges)
                })?);
            }
        }

        for button in shared.roster.all(Role::Button) {
            let shared = shared.clone();
            let target = button.clone();
            listeners.push(Listener::new(button, "click", move |event| {
                if let Some(pointer) = pointer_of(&event) {
                    shared.on_button_click(&target, pointer);
                }
            })?);
        }

        debug!("pointer engine attached with {} listeners", listeners.len());
        Ok(Self {
            _listeners: listeners,
            shared,
        })
    }
}

impl Drop for PointerInteractionEngine {
    fn drop(&mut self) {
        self.shared.timers.cancel_all();
        debug!("pointer engine detached");
    }
}
