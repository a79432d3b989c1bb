//! Viewport geometry for hosts that cannot deliver intersection signals.

/// Vertical extent of an element relative to the top of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(self) -> f32 {
        self.top + self.height
    }

    /// Edge-adjacent elements count as intersecting.
    pub fn intersects(self, viewport_height: f32) -> bool {
        viewport_height > 0.0 && self.top <= viewport_height && self.bottom() >= 0.0
    }
}

/// Fraction (0.0..=1.0) of `bounds` that lies inside a viewport of the given
/// height.
pub fn intersection_ratio(bounds: Bounds, viewport_height: f32) -> f32 {
    if !bounds.intersects(viewport_height) {
        return 0.0;
    }

    // Zero-area elements report full visibility while inside, like the host API.
    if bounds.height <= 0.0 {
        return 1.0;
    }

    let visible = bounds.bottom().min(viewport_height) - bounds.top.max(0.0);
    if visible <= 0.0 {
        0.0
    } else {
        (visible / bounds.height).min(1.0)
    }
}
