pub const HEADER_OFFSET: f64 = 80.0;
pub const NAV_SCROLL_MS: f64 = 1000.0;
pub const CTA_SCROLL_MS: f64 = 1200.0;

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

/// Scroll target for an anchor whose viewport-relative top is `element_top`, leaving room
/// for the fixed header.
pub fn anchor_target(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - HEADER_OFFSET
}

/// An eased scroll from one offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self { from, to, duration_ms }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Scroll offset after `elapsed_ms`. The final step lands exactly on `to`.
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out_cubic(progress)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}
