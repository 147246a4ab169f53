use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    Blur(f64),
    Brightness(f64),
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Blur(px) => write!(f, "blur({}px)", px),
            Filter::Brightness(level) => write!(f, "brightness({})", level),
        }
    }
}

/// Visual state of one element for one frame. Nothing carries over between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotation_deg: f64,
    pub opacity: Option<f64>,
    pub filter: Option<Filter>,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotation_deg: 0.0,
            opacity: None,
            filter: None,
        }
    }
}

impl TransformState {
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..Self::default()
        }
    }

    pub fn scaled(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_deg = degrees;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// CSS `transform` value. Uniform scale commutes with rotation, so one order serves
    /// every role.
    pub fn transform_css(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if self.translate_x != 0.0 || self.translate_y != 0.0 {
            parts.push(format!(
                "translate3d({}px, {}px, 0)",
                self.translate_x, self.translate_y
            ));
        }
        if self.rotation_deg != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotation_deg));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if parts.is_empty() {
            return "none".to_string();
        }
        parts.join(" ")
    }
}

/// Appends a secondary transform to a base one without producing `none <fn>`.
pub fn compose(base: &str, extra: &str) -> String {
    let base = base.trim();
    if base.is_empty() || base == "none" {
        extra.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

pub fn translate_css(x: f64, y: f64) -> String {
    format!("translate({}px, {}px)", x, y)
}
