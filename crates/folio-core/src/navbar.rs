//! Navbar background that firms up once the page leaves the hero area.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavbarTone {
    Translucent,
    Solid,
}

impl NavbarTone {
    pub fn for_scroll(scroll_y: f32, solid_after: f32) -> Self {
        if scroll_y > solid_after {
            Self::Solid
        } else {
            Self::Translucent
        }
    }

    /// CSS `background` value.
    pub const fn background(self) -> &'static str {
        match self {
            Self::Translucent => "rgba(255, 255, 255, 0.95)",
            Self::Solid => "rgba(255, 255, 255, 0.98)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarScroll {
    solid_after: f32,
    tone: Option<NavbarTone>,
}

impl NavbarScroll {
    pub const fn new(solid_after: f32) -> Self {
        Self {
            solid_after,
            tone: None,
        }
    }

    pub const fn tone(&self) -> Option<NavbarTone> {
        self.tone
    }

    /// Returns the tone to draw when it differs from the last one drawn.
    pub fn on_scroll(&mut self, scroll_y: f32) -> Option<NavbarTone> {
        let tone = NavbarTone::for_scroll(scroll_y, self.solid_after);
        if self.tone == Some(tone) {
            return None;
        }

        self.tone = Some(tone);
        Some(tone)
    }
}
