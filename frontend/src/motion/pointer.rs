//! Pointer-driven adjustments layered over the scroll motion.

use super::geometry::{Rect, Viewport};

pub const REPULSION_RADIUS: f64 = 200.0;
pub const REPULSION_STRENGTH: f64 = 15.0;
pub const TILT_DAMPING: f64 = 8.0;
pub const SECTION_SHIFT_PX: f64 = 10.0;
pub const RIPPLE_SPREAD: f64 = 1.5;
pub const RIPPLE_LIFETIME_MS: u32 = 800;
pub const PRESS_SCALE: f64 = 0.95;
pub const PRESS_RELEASE_MS: u32 = 150;
pub const HOVER_ITEM_STAGGER_MS: u32 = 50;

/// Parallax nudge of the `index`-th hero layer; deeper layers move further.
pub fn hero_layer_offset(pointer: (f64, f64), viewport: Viewport, index: usize) -> (f64, f64) {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return (0.0, 0.0);
    }
    let speed = (index as f64 + 1.0) * 0.5;
    let x = (pointer.0 / viewport.width - 0.5) * speed * 20.0;
    let y = (pointer.1 / viewport.height - 0.5) * speed * 20.0;
    (x, y)
}

/// Displacement of a floating card by a nearby cursor. `None` outside the radius or when
/// the cursor sits exactly on the card center.
pub fn card_repulsion(pointer: (f64, f64), card: Rect) -> Option<(f64, f64)> {
    let (cx, cy) = card.center();
    let dx = pointer.0 - cx;
    let dy = pointer.1 - cy;
    let distance = dx.hypot(dy);
    if distance >= REPULSION_RADIUS || distance <= f64::EPSILON {
        return None;
    }
    let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
    Some((
        dx / distance * force * REPULSION_STRENGTH,
        dy / distance * force * REPULSION_STRENGTH,
    ))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt { rotate_x: 0.0, rotate_y: 0.0 };

    /// Tilt toward the cursor; `local` is relative to the element's top-left corner.
    pub fn toward(local: (f64, f64), size: (f64, f64)) -> Self {
        let center_x = size.0 / 2.0;
        let center_y = size.1 / 2.0;
        Self {
            rotate_x: (local.1 - center_y) / TILT_DAMPING,
            rotate_y: (center_x - local.0) / TILT_DAMPING,
        }
    }

    pub fn css(&self) -> String {
        if *self == Self::NEUTRAL {
            return "perspective(1000px) rotateX(0deg) rotateY(0deg) translateX(0px) scale(1)"
                .to_string();
        }
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateX(8px) scale(1.02)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Background shift of a section under the cursor, in pixels around its center.
pub fn section_shift(pointer: (f64, f64), section: Rect) -> (f64, f64) {
    if section.is_degenerate() {
        return (0.0, 0.0);
    }
    let x = ((pointer.0 - section.left) / section.width - 0.5) * 2.0;
    let y = ((pointer.1 - section.top) / section.height - 0.5) * 2.0;
    (x * SECTION_SHIFT_PX, y * SECTION_SHIFT_PX)
}

pub fn section_shift_css(shift: (f64, f64)) -> String {
    format!("calc(50% + {}px) calc(50% + {}px)", shift.0, shift.1)
}

/// Size and placement of a click ripple inside the clicked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn at(local: (f64, f64), element_size: (f64, f64)) -> Self {
        let size = element_size.0.max(element_size.1) * RIPPLE_SPREAD;
        Self {
            size,
            left: local.0 - size / 2.0,
            top: local.1 - size / 2.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             background: radial-gradient(circle, rgba(255, 255, 255, 0.6) 0%, transparent 70%); \
             border-radius: 50%; transform: scale(0); animation: advancedRipple 0.8s ease-out; \
             pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}

/// Hover styling of a menu or showcase card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverEmphasis {
    pub lift_px: f64,
    pub scale: f64,
    pub brightness: f64,
    pub shadow: &'static str,
}

impl HoverEmphasis {
    pub const RAISED: HoverEmphasis = HoverEmphasis {
        lift_px: -12.0,
        scale: 1.03,
        brightness: 1.05,
        shadow: "0 20px 40px rgba(0, 0, 0, 0.15)",
    };

    pub const RESTING: HoverEmphasis = HoverEmphasis {
        lift_px: 0.0,
        scale: 1.0,
        brightness: 1.0,
        shadow: "var(--shadow-md)",
    };

    pub fn transform_css(&self) -> String {
        format!("translateY({}px) scale({})", self.lift_px, self.scale)
    }

    pub fn filter_css(&self) -> String {
        format!("brightness({})", self.brightness)
    }

    /// Horizontal nudge of the card's inner items while raised.
    pub fn item_nudge_px(&self) -> f64 {
        if *self == Self::RAISED {
            5.0
        } else {
            0.0
        }
    }
}

pub fn hover_item_delay_ms(index: usize) -> u32 {
    index as u32 * HOVER_ITEM_STAGGER_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hero_offset_is_zero_at_center() {
        let viewport = Viewport::new(0.0, 1000.0, 800.0);
        assert_eq!(hero_layer_offset((500.0, 400.0), viewport, 3), (0.0, 0.0));

        let (x, y) = hero_layer_offset((1000.0, 0.0), viewport, 1);
        assert!(close(x, 10.0));
        assert!(close(y, -10.0));
    }

    #[test]
    fn hero_offset_guards_empty_viewport() {
        let viewport = Viewport::new(0.0, 0.0, 0.0);
        assert_eq!(hero_layer_offset((10.0, 10.0), viewport, 0), (0.0, 0.0));
    }

    #[test]
    fn repulsion_falls_off_with_distance() {
        let card = Rect::new(0.0, 0.0, 100.0, 100.0);
        let (x, y) = card_repulsion((150.0, 50.0), card).expect("inside radius");
        assert!(close(x, 0.5 * 15.0));
        assert!(close(y, 0.0));

        assert!(card_repulsion((250.0, 50.0), card).is_none());
        assert!(card_repulsion((50.0, 50.0), card).is_none());
    }

    #[test]
    fn tilt_follows_cursor() {
        let tilt = Tilt::toward((0.0, 80.0), (160.0, 80.0));
        assert!(close(tilt.rotate_x, 5.0));
        assert!(close(tilt.rotate_y, 10.0));
        assert!(tilt.css().ends_with("translateX(8px) scale(1.02)"));
        assert_eq!(Tilt::toward((80.0, 40.0), (160.0, 80.0)), Tilt::NEUTRAL);
    }

    #[test]
    fn section_shift_spans_ten_pixels() {
        let section = Rect::new(100.0, 100.0, 200.0, 100.0);
        assert_eq!(section_shift((300.0, 100.0), section), (10.0, -10.0));
        assert_eq!(section_shift((5.0, 5.0), Rect::new(0.0, 0.0, 0.0, 50.0)), (0.0, 0.0));
        assert_eq!(section_shift_css((10.0, -10.0)), "calc(50% + 10px) calc(50% + -10px)");
    }

    #[test]
    fn ripple_is_centered_on_click() {
        let ripple = RippleGeometry::at((30.0, 10.0), (120.0, 40.0));
        assert_eq!(ripple.size, 180.0);
        assert_eq!(ripple.left, -60.0);
        assert_eq!(ripple.top, -80.0);
        assert!(ripple.css().contains("width: 180px"));
    }

    #[test]
    fn hover_states() {
        assert_eq!(HoverEmphasis::RAISED.transform_css(), "translateY(-12px) scale(1.03)");
        assert_eq!(HoverEmphasis::RESTING.transform_css(), "translateY(0px) scale(1)");
        assert_eq!(HoverEmphasis::RAISED.item_nudge_px(), 5.0);
        assert_eq!(hover_item_delay_ms(4), 200);
    }
}
