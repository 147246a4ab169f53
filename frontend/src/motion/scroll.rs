//! Scroll-driven motion for the landing page.
//!
//! Every function here is a pure map from the current [`Viewport`] (and, where the
//! effect is local to a section, that section's [`Rect`]) to a [`TransformState`].
//! `None` means "leave the element alone this frame".

use std::f64::consts::PI;

use super::geometry::{Rect, Viewport};
use super::transform::{Filter, TransformState};

/// Hero layers stop following the scroll once it passes this many viewport heights.
pub const HERO_LAYER_LIMIT: f64 = 1.5;
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
pub const NAV_PROBE_OFFSET: f64 = 150.0;
pub const REVEAL_STAGGER_MS: u32 = 150;

/// A section whose background image scrolls at its own rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub selector: &'static str,
    pub speed: f64,
}

pub const BACKDROPS: [Backdrop; 7] = [
    Backdrop { selector: ".hero", speed: 0.5 },
    Backdrop { selector: ".featured-waffle", speed: 0.3 },
    Backdrop { selector: ".menu-section", speed: 0.4 },
    Backdrop { selector: ".signature-collection", speed: 0.2 },
    Backdrop { selector: ".handcrafted-shakes", speed: 0.3 },
    Backdrop { selector: ".about-section", speed: 0.2 },
    Backdrop { selector: ".contact-section", speed: 0.3 },
];

/// Vertical background offset in pixels, only while the section is on screen.
pub fn backdrop_offset(rect: Rect, viewport: Viewport, speed: f64) -> Option<f64> {
    if !rect.intersects_viewport(viewport.height) {
        return None;
    }
    let element_top = rect.top + viewport.scroll_y;
    Some((viewport.scroll_y - element_top) * speed)
}

pub fn hero_layer(viewport: Viewport, index: usize) -> Option<TransformState> {
    if viewport.scroll_y >= viewport.height * HERO_LAYER_LIMIT {
        return None;
    }
    let speed = 0.3 + index as f64 * 0.1;
    Some(TransformState::translate(0.0, viewport.scroll_y * speed))
}

fn within_hero(viewport: Viewport) -> bool {
    viewport.scroll_y < viewport.height
}

pub fn floating_logo(viewport: Viewport) -> Option<TransformState> {
    if !within_hero(viewport) {
        return None;
    }
    let p = viewport.scroll_fraction();
    Some(
        TransformState::translate(0.0, viewport.scroll_y * 0.2)
            .with_scale((1.0 - p * 0.2).max(0.8))
            .with_rotation(p * 5.0),
    )
}

pub fn hero_content(viewport: Viewport) -> Option<TransformState> {
    if !within_hero(viewport) {
        return None;
    }
    let p = viewport.scroll_fraction();
    Some(
        TransformState::translate(0.0, viewport.scroll_y * 0.6)
            .with_opacity((1.0 - p * 1.5).max(0.0))
            .with_filter(Filter::Blur(p * 2.0)),
    )
}

pub fn hero_cta(viewport: Viewport) -> Option<TransformState> {
    if !within_hero(viewport) {
        return None;
    }
    let p = viewport.scroll_fraction();
    Some(TransformState::translate(0.0, viewport.scroll_y * 0.3).with_scale((1.0 - p * 0.1).max(0.9)))
}

pub fn featured_background(section: Rect, viewport_height: f64) -> Option<TransformState> {
    if !section.intersects_viewport(viewport_height) {
        return None;
    }
    let q = section.travel(viewport_height);
    Some(
        TransformState::translate(0.0, q * 80.0)
            .with_rotation(q * 2.0)
            .with_scale(1.1)
            .with_opacity(0.8 + q * 0.2),
    )
}

/// Wave motion of the `index`-th floating card, driven by the section it floats over.
pub fn floating_card(index: usize, section: Rect, viewport_height: f64) -> Option<TransformState> {
    if !section.intersects_viewport(viewport_height) {
        return None;
    }
    let q = section.travel(viewport_height) * PI;
    let i = index as f64;
    let amplitude = 30.0 + i * 8.0;
    let frequency = 0.6 + i * 0.3;
    let phase = i * PI / 2.0;

    Some(
        TransformState::translate(
            (q * frequency * 0.5 + phase).cos() * 15.0,
            (q * frequency + phase).sin() * amplitude,
        )
        .with_rotation((q * frequency * 0.7 + phase).sin() * 8.0)
        .with_scale(0.9 + (q * 2.0 + phase).sin() * 0.1)
        .with_opacity(0.7 + (q + phase).sin() * 0.3),
    )
}

/// Slight zoom and brightening of the section nearest the middle of the screen.
pub fn section_emphasis(section: Rect, viewport_height: f64) -> Option<TransformState> {
    if viewport_height <= 0.0 || !section.within_band(viewport_height) {
        return None;
    }
    let (_, center_y) = section.center();
    let distance = (viewport_height / 2.0 - center_y).abs();
    let proximity = (1.0 - distance / viewport_height).max(0.0);
    Some(
        TransformState::scaled(0.98 + proximity * 0.02)
            .with_filter(Filter::Brightness(0.9 + proximity * 0.1)),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub backdrop_blur_px: f64,
}

pub fn navbar(scroll_y: f64) -> NavbarState {
    let scrolled = scroll_y > NAVBAR_SCROLLED_AFTER;
    NavbarState {
        scrolled,
        backdrop_blur_px: if scrolled { 15.0 } else { 10.0 },
    }
}

/// Absolute vertical extent of a page section, keyed by its element id.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionExtent {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Which navigation link is highlighted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    active: Option<String>,
}

impl NavigationState {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn activate(&mut self, id: &str) -> bool {
        if self.active.as_deref() == Some(id) {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    /// Re-derives the active section from the scroll offset. Returns whether it changed.
    /// A probe that falls between sections keeps the previous highlight.
    pub fn update(&mut self, scroll_y: f64, sections: &[SectionExtent]) -> bool {
        let probe = scroll_y + NAV_PROBE_OFFSET;
        match sections.iter().find(|section| section.contains(probe)) {
            Some(section) => self.activate(&section.id),
            None => false,
        }
    }

    /// Whether a link pointing at `href` (`#id`) should carry the active class.
    pub fn is_active_href(&self, href: &str) -> bool {
        match (self.active.as_deref(), href.strip_prefix('#')) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }
}

/// Elements that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str =
    ".menu-category, .signature-card, .handcrafted-card, .contact-item, .delivery-info";

const STAGGERED_REVEALS: [&str; 3] = ["menu-category", "signature-card", "handcrafted-card"];

/// Transition delay for a revealed element, `None` for elements that reveal at once.
pub fn reveal_delay_ms(class_name: &str, sibling_index: usize) -> Option<u32> {
    let staggered = class_name
        .split_whitespace()
        .any(|class| STAGGERED_REVEALS.contains(&class));
    staggered.then(|| sibling_index as u32 * REVEAL_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    const VH: f64 = 800.0;

    fn at(scroll_y: f64) -> Viewport {
        Viewport::new(scroll_y, 1280.0, VH)
    }

    #[test]
    fn hero_layers_follow_scroll_until_limit() {
        for y in [0.0, 120.0, 799.0, 1199.0] {
            for index in 0..4 {
                let state = hero_layer(at(y), index).expect("inside limit");
                assert!(close(state.translate_y, y * (0.3 + index as f64 * 0.1)));
                assert_eq!(state.translate_x, 0.0);
            }
        }
        assert!(hero_layer(at(1200.0), 0).is_none());
        assert!(hero_layer(at(5000.0), 2).is_none());
    }

    #[test]
    fn logo_scale_is_clamped() {
        let top = floating_logo(at(0.0)).expect("visible");
        assert_eq!(top.scale, 1.0);
        assert_eq!(top.rotation_deg, 0.0);

        let half = floating_logo(at(400.0)).expect("visible");
        assert!(close(half.scale, 0.9));
        assert!(close(half.translate_y, 80.0));
        assert!(close(half.rotation_deg, 2.5));

        for y in (0..800).step_by(37) {
            let scale = floating_logo(at(y as f64)).expect("visible").scale;
            assert!((0.8..=1.0).contains(&scale));
        }
        assert!(floating_logo(at(800.0)).is_none());
    }

    #[test]
    fn hero_content_fades_and_blurs() {
        let state = hero_content(at(400.0)).expect("visible");
        assert!(close(state.opacity.expect("opacity"), 0.25));
        assert!(close(state.translate_y, 240.0));
        assert_eq!(state.filter, Some(Filter::Blur(1.0)));

        let late = hero_content(at(700.0)).expect("visible");
        assert_eq!(late.opacity, Some(0.0));
    }

    #[test]
    fn cta_scale_floor() {
        let state = hero_cta(at(799.0)).expect("visible");
        assert!(state.scale >= 0.9);
        assert!(close(state.translate_y, 799.0 * 0.3));
        assert!(hero_cta(at(800.0)).is_none());
    }

    #[test]
    fn featured_background_tracks_section_travel() {
        let section = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let state = featured_background(section, VH).expect("visible");
        assert!(close(state.translate_y, 40.0));
        assert!(close(state.rotation_deg, 1.0));
        assert_eq!(state.scale, 1.1);
        assert!(close(state.opacity.expect("opacity"), 0.9));

        assert!(featured_background(Rect::new(0.0, 900.0, 1280.0, 800.0), VH).is_none());
    }

    #[test]
    fn floating_cards_start_on_their_phase() {
        let entering = Rect::new(0.0, VH, 1280.0, 600.0);

        let first = floating_card(0, entering, VH);
        assert!(first.is_none(), "top edge on the fold is not yet visible");

        let section = Rect::new(0.0, VH - 1e-12, 1280.0, 600.0);
        let first = floating_card(0, section, VH).expect("visible");
        assert!(close(first.translate_y, 0.0));
        assert!(close(first.translate_x, 15.0));
        assert!(close(first.scale, 0.9));
        assert!(close(first.opacity.expect("opacity"), 0.7));

        let second = floating_card(1, section, VH).expect("visible");
        assert!(close(second.translate_y, 38.0));
        assert!(close(second.translate_x, 0.0));
        assert!(close(second.scale, 1.0));
        assert!(close(second.opacity.expect("opacity"), 1.0));
    }

    #[test]
    fn emphasis_peaks_at_center() {
        let centered = Rect::new(0.0, 200.0, 1280.0, 400.0);
        let state = section_emphasis(centered, VH).expect("in band");
        assert!(close(state.scale, 1.0));
        match state.filter {
            Some(Filter::Brightness(level)) => assert!(close(level, 1.0)),
            other => panic!("unexpected filter {:?}", other),
        }

        let low = Rect::new(0.0, 600.0, 1280.0, 400.0);
        let state = section_emphasis(low, VH).expect("in band");
        assert!(close(state.scale, 0.98 + 0.5 * 0.02));

        assert!(section_emphasis(Rect::new(0.0, 700.0, 1280.0, 400.0), VH).is_none());
        assert!(section_emphasis(centered, 0.0).is_none());
    }

    #[test]
    fn backdrop_offset_uses_absolute_top() {
        let viewport = at(1000.0);
        let rect = Rect::new(0.0, 200.0, 1280.0, 600.0);
        let offset = backdrop_offset(rect, viewport, 0.4).expect("visible");
        assert!(close(offset, -80.0));
        assert!(backdrop_offset(Rect::new(0.0, 900.0, 1280.0, 600.0), viewport, 0.4).is_none());
    }

    #[test]
    fn backdrop_table_speeds() {
        let speeds: Vec<f64> = BACKDROPS.iter().map(|b| b.speed).collect();
        assert_eq!(speeds, vec![0.5, 0.3, 0.4, 0.2, 0.3, 0.2, 0.3]);
    }

    #[test]
    fn navbar_switches_after_fifty_pixels() {
        assert!(!navbar(50.0).scrolled);
        assert_eq!(navbar(50.0).backdrop_blur_px, 10.0);
        assert!(navbar(50.5).scrolled);
        assert_eq!(navbar(51.0).backdrop_blur_px, 15.0);
    }

    fn three_sections() -> Vec<SectionExtent> {
        vec![
            SectionExtent { id: "home".into(), top: 0.0, height: 800.0 },
            SectionExtent { id: "menu".into(), top: 800.0, height: 1200.0 },
            SectionExtent { id: "contact".into(), top: 2000.0, height: 600.0 },
        ]
    }

    #[test]
    fn exactly_one_link_is_active() {
        let sections = three_sections();
        let mut nav = NavigationState::default();

        assert!(nav.update(700.0, &sections));
        assert_eq!(nav.active(), Some("menu"));

        let hrefs = ["#home", "#menu", "#contact"];
        let active: Vec<_> = hrefs.iter().filter(|href| nav.is_active_href(href)).collect();
        assert_eq!(active, vec![&"#menu"]);

        assert!(!nav.update(710.0, &sections));
        assert!(nav.update(1850.0, &sections));
        assert_eq!(nav.active(), Some("contact"));
    }

    #[test]
    fn gap_keeps_previous_highlight() {
        let sections = three_sections();
        let mut nav = NavigationState::default();
        nav.update(0.0, &sections);
        assert!(!nav.update(5000.0, &sections));
        assert_eq!(nav.active(), Some("home"));
    }

    #[test]
    fn reveal_stagger_applies_to_card_groups() {
        assert_eq!(reveal_delay_ms("menu-category fade-in", 3), Some(450));
        assert_eq!(reveal_delay_ms("signature-card", 0), Some(0));
        assert_eq!(reveal_delay_ms("contact-item fade-in", 2), None);
        assert_eq!(reveal_delay_ms("menu-category-title", 2), None);
    }
}
