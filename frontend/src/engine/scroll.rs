use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use super::dom::{self, set_style};
use super::frame::{FrameLoop, FrameTicker};
use super::layers::TransformLayers;
use super::listener::Listener;
use super::roster::{ElementRoster, Role};
use super::timers::TimerSet;
use crate::motion::easing::{self, ScrollTween};
use crate::motion::geometry::Viewport;
use crate::motion::pointer::{PRESS_RELEASE_MS, PRESS_SCALE};
use crate::motion::scroll::{self, NavigationState, SectionExtent, REVEAL_SELECTOR};
use crate::motion::transform::TransformState;

const OVERLAY_CSS: &str = "position: absolute; top: 0; left: 0; width: 100%; height: 100%; \
     pointer-events: none; z-index: 1; transition: opacity 0.5s ease;";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An intersection observer together with the callback it calls into.
struct Observer {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Observer {
    fn new<F>(threshold: f64, root_margin: Option<&str>, on_visible: F) -> Result<Self, JsValue>
    where
        F: Fn(&Element) -> bool + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if on_visible(&target) {
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

struct ScrollShared {
    window: Window,
    document: Document,
    roster: Rc<ElementRoster>,
    layers: Rc<TransformLayers>,
    navigation: RefCell<NavigationState>,
    smooth_scroll: RefCell<Option<FrameLoop>>,
    timers: TimerSet,
}

impl ScrollShared {
    fn on_frame(&self) {
        let viewport = dom::viewport(&self.window);
        self.update_hero(viewport);
        self.update_featured(viewport);
        self.update_floating_cards(viewport);
        self.update_sections(viewport);
        self.update_backdrops(viewport);
        self.update_navbar(viewport);
        self.update_navigation(viewport);
    }

    fn apply(&self, role: Role, index: usize, element: &HtmlElement, state: TransformState) {
        self.layers.write(role, index, element, state.transform_css());
        if let Some(opacity) = state.opacity {
            set_style(element, "opacity", &opacity.to_string());
        }
        if let Some(filter) = state.filter {
            set_style(element, "filter", &filter.to_string());
        }
    }

    fn apply_one(&self, role: Role, state: Option<TransformState>) {
        if let (Some(element), Some(state)) = (self.roster.one(role), state) {
            self.apply(role, 0, element, state);
        }
    }

    fn update_hero(&self, viewport: Viewport) {
        for (index, layer) in self.roster.all(Role::HeroLayer).iter().enumerate() {
            let Some(state) = scroll::hero_layer(viewport, index) else {
                break;
            };
            self.apply(Role::HeroLayer, index, layer, state);
        }
        self.apply_one(Role::FloatingLogo, scroll::floating_logo(viewport));
        self.apply_one(Role::HeroContent, scroll::hero_content(viewport));
        self.apply_one(Role::HeroCta, scroll::hero_cta(viewport));
    }

    fn update_featured(&self, viewport: Viewport) {
        let (Some(background), Some(section)) = (
            self.roster.one(Role::FeaturedBackground),
            self.roster.one(Role::FeaturedSection),
        ) else {
            return;
        };
        if let Some(state) = scroll::featured_background(dom::rect(section), viewport.height) {
            self.apply(Role::FeaturedBackground, 0, background, state);
        }
    }

    fn update_floating_cards(&self, viewport: Viewport) {
        let Some(about) = self.roster.one(Role::AboutSection) else {
            return;
        };
        let about = dom::rect(about);
        for (index, card) in self.roster.all(Role::FloatingCard).iter().enumerate() {
            if let Some(state) = scroll::floating_card(index, about, viewport.height) {
                self.apply(Role::FloatingCard, index, card, state);
            }
        }
    }

    fn update_sections(&self, viewport: Viewport) {
        for (index, section) in self.roster.all(Role::Section).iter().enumerate() {
            if let Some(state) = scroll::section_emphasis(dom::rect(section), viewport.height) {
                self.apply(Role::Section, index, section, state);
                set_style(section, "transition", "transform 0.3s ease, filter 0.3s ease");
            }
        }
    }

    fn update_backdrops(&self, viewport: Viewport) {
        for (section, speed) in self.roster.backdrops() {
            if let Some(offset) = scroll::backdrop_offset(dom::rect(section), viewport, *speed) {
                set_style(section, "background-position", &format!("center {}px", offset));
            }
        }
    }

    fn update_navbar(&self, viewport: Viewport) {
        let Some(navbar) = self.roster.one(Role::Navbar) else {
            return;
        };
        let state = scroll::navbar(viewport.scroll_y);
        let classes = navbar.class_list();
        let result = if state.scrolled {
            classes.add_1("scrolled")
        } else {
            classes.remove_1("scrolled")
        };
        if let Err(err) = result {
            warn!("failed to toggle navbar state: {:?}", err);
        }
        set_style(
            navbar,
            "backdrop-filter",
            &format!("blur({}px)", state.backdrop_blur_px),
        );
    }

    fn section_extents(&self, scroll_y: f64) -> Vec<SectionExtent> {
        self.roster
            .all(Role::AnchoredSection)
            .iter()
            .map(|section| SectionExtent {
                id: section.id(),
                top: dom::rect(section).top + scroll_y,
                height: section.offset_height() as f64,
            })
            .collect()
    }

    fn update_navigation(&self, viewport: Viewport) {
        let extents = self.section_extents(viewport.scroll_y);
        let changed = self.navigation.borrow_mut().update(viewport.scroll_y, &extents);
        if changed {
            self.highlight_links();
        }
    }

    fn highlight_links(&self) {
        let navigation = self.navigation.borrow();
        for link in self.roster.all(Role::NavLink) {
            let href = link.get_attribute("href").unwrap_or_default();
            let classes = link.class_list();
            let result = if navigation.is_active_href(&href) {
                set_style(link, "transform", "scale(1.05)");
                classes.add_1("active")
            } else {
                set_style(link, "transform", "scale(1)");
                classes.remove_1("active")
            };
            if let Err(err) = result {
                warn!("failed to update nav link {}: {:?}", href, err);
            }
        }
    }

    /// Eases the window towards `target`. A scroll already in flight is cancelled first.
    fn scroll_to(&self, target: &Element, duration_ms: f64) {
        self.smooth_scroll.borrow_mut().take();

        let from = self.window.scroll_y().unwrap_or(0.0);
        let tween = ScrollTween::new(from, easing::anchor_target(dom::rect(target).top, from), duration_ms);
        let window = self.window.clone();
        let mut started_at: Option<f64> = None;

        match FrameLoop::start(move |now| {
            let elapsed = now - *started_at.get_or_insert(now);
            window.scroll_to_with_x_and_y(0.0, tween.position_at(elapsed));
            !tween.is_finished(elapsed)
        }) {
            Ok(animation) => *self.smooth_scroll.borrow_mut() = Some(animation),
            Err(err) => warn!("smooth scroll unavailable: {:?}", err),
        }
    }

    fn on_nav_click(&self, link: &HtmlElement, event: &Event) {
        event.prevent_default();
        event.stop_propagation();

        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(target) = self.document.query_selector(&href).ok().flatten() else {
            debug!("nav target {} not found", href);
            return;
        };
        if let Some(id) = href.strip_prefix('#') {
            self.navigation.borrow_mut().activate(id);
            self.highlight_links();
        }
        self.scroll_to(&target, easing::NAV_SCROLL_MS);
    }

    fn on_cta_click(&self, cta: &HtmlElement, event: &Event) {
        event.prevent_default();

        set_style(cta, "transform", &format!("scale({})", PRESS_SCALE));
        let pressed = cta.clone();
        self.timers.schedule(PRESS_RELEASE_MS, move || {
            if pressed.is_connected() {
                set_style(&pressed, "transform", "scale(1)");
            }
        });

        match self.document.query_selector("#menu").ok().flatten() {
            Some(menu) => self.scroll_to(&menu, easing::CTA_SCROLL_MS),
            None => debug!("menu section not found"),
        }
    }
}

fn reveal(target: &Element) -> bool {
    if let Err(err) = target.class_list().add_1("visible") {
        warn!("failed to reveal element: {:?}", err);
        return false;
    }
    if let Some(delay) = scroll::reveal_delay_ms(&target.class_name(), dom::sibling_index(target)) {
        if let Some(element) = target.dyn_ref::<HtmlElement>() {
            set_style(element, "transition-delay", &format!("{}ms", delay));
        }
    }
    true
}

fn add_overlay(document: &Document, section: &Element) -> bool {
    if section.query_selector(".dynamic-overlay").ok().flatten().is_some() {
        return true;
    }
    let overlay = match document.create_element("div") {
        Ok(overlay) => overlay,
        Err(err) => {
            warn!("failed to create overlay: {:?}", err);
            return false;
        }
    };
    overlay.set_class_name("dynamic-overlay");
    if let Some(overlay) = overlay.dyn_ref::<HtmlElement>() {
        overlay.style().set_css_text(OVERLAY_CSS);
    }
    section.append_child(&overlay).is_ok()
}

/// Scroll-driven motion for the whole page. Construct once the page has rendered; dropping
/// it removes every listener and observer and stops any running scroll animation.
pub struct ScrollVisualEngine {
    _listeners: Vec<Listener>,
    _reveal: Observer,
    _overlays: Observer,
    _ticker: FrameTicker,
    shared: Rc<ScrollShared>,
}

impl ScrollVisualEngine {
    pub fn attach(
        window: &Window,
        document: &Document,
        roster: Rc<ElementRoster>,
        layers: Rc<TransformLayers>,
    ) -> Result<Self, JsValue> {
        let shared = Rc::new(ScrollShared {
            window: window.clone(),
            document: document.clone(),
            roster,
            layers,
            navigation: RefCell::new(NavigationState::default()),
            smooth_scroll: RefCell::new(None),
            timers: TimerSet::new(),
        });

        let ticker = {
            let shared = shared.clone();
            FrameTicker::new(move |_| shared.on_frame())
        };

        let mut listeners = Vec::new();
        for event in ["scroll", "resize"] {
            let ticker = ticker.clone();
            listeners.push(Listener::new(window, event, move |_| ticker.request())?);
        }

        for link in shared.roster.all(Role::NavLink) {
            let shared = shared.clone();
            let target = link.clone();
            listeners.push(Listener::new(link, "click", move |event| {
                shared.on_nav_click(&target, &event)
            })?);
        }

        if let Some(cta) = shared.roster.one(Role::HeroCta) {
            let shared = shared.clone();
            let target = cta.clone();
            listeners.push(Listener::new(cta, "click", move |event| {
                shared.on_cta_click(&target, &event)
            })?);
        }

        let reveal_observer = Observer::new(0.1, Some("0px 0px -50px 0px"), reveal)?;
        for element in dom::select_all(document, REVEAL_SELECTOR)? {
            element.class_list().add_1("fade-in")?;
            reveal_observer.observe(&element);
        }

        let overlay_document = document.clone();
        let overlay_observer = Observer::new(0.3, None, move |section| {
            add_overlay(&overlay_document, section)
        })?;
        for (section, _) in shared.roster.backdrops() {
            overlay_observer.observe(section);
        }

        debug!("scroll engine attached with {} listeners", listeners.len());
        ticker.request();

        Ok(Self {
            _listeners: listeners,
            _reveal: reveal_observer,
            _overlays: overlay_observer,
            _ticker: ticker,
            shared,
        })
    }

    pub fn active_section(&self) -> Option<String> {
        self.shared.navigation.borrow().active().map(str::to_string)
    }
}

impl Drop for ScrollVisualEngine {
    fn drop(&mut self) {
        self.shared.smooth_scroll.borrow_mut().take();
        self.shared.timers.cancel_all();
        debug!("scroll engine detached");
    }
}
