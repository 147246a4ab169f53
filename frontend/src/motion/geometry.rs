/// Snapshot of the window the engines read at the start of every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, width: f64, height: f64) -> Self {
        Self {
            scroll_y: scroll_y.max(0.0),
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Scroll offset as a fraction of the viewport height. Zero for a collapsed viewport.
    pub fn scroll_fraction(&self) -> f64 {
        if self.height <= 0.0 {
            return 0.0;
        }
        self.scroll_y / self.height
    }
}

/// Viewport-relative bounding box, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom() > 0.0
    }

    /// The emphasis band: the box reaches above 80% of the viewport and below 20% of it.
    pub fn within_band(&self, viewport_height: f64) -> bool {
        self.top < viewport_height * 0.8 && self.bottom() > viewport_height * 0.2
    }

    /// How far the box has travelled through the viewport, 0 when its top touches the
    /// bottom edge and 1 when its bottom leaves the top edge.
    pub fn travel(&self, viewport_height: f64) -> f64 {
        let span = viewport_height + self.height;
        if span <= 0.0 {
            return 0.0;
        }
        (viewport_height - self.top) / span
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_scroll_is_clamped() {
        let viewport = Viewport::new(-40.0, 1280.0, 800.0);
        assert_eq!(viewport.scroll_y, 0.0);
        assert_eq!(viewport.scroll_fraction(), 0.0);
    }

    #[test]
    fn collapsed_viewport_has_no_fraction() {
        assert_eq!(Viewport::new(300.0, 0.0, 0.0).scroll_fraction(), 0.0);
    }

    #[test]
    fn intersection_is_strict_on_both_edges() {
        assert!(Rect::new(0.0, -99.0, 10.0, 100.0).intersects_viewport(800.0));
        assert!(!Rect::new(0.0, -100.0, 10.0, 100.0).intersects_viewport(800.0));
        assert!(!Rect::new(0.0, 800.0, 10.0, 100.0).intersects_viewport(800.0));
    }

    #[test]
    fn band_excludes_the_outer_fifths() {
        assert!(Rect::new(0.0, 500.0, 10.0, 100.0).within_band(1000.0));
        assert!(!Rect::new(0.0, 800.0, 10.0, 100.0).within_band(1000.0));
        assert!(!Rect::new(0.0, 50.0, 10.0, 150.0).within_band(1000.0));
    }

    #[test]
    fn travel_runs_from_zero_to_one() {
        let entering = Rect::new(0.0, 800.0, 100.0, 400.0);
        let leaving = Rect::new(0.0, -400.0, 100.0, 400.0);
        assert_eq!(entering.travel(800.0), 0.0);
        assert_eq!(leaving.travel(800.0), 1.0);
    }
}
