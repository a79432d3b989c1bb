//! Page-wide tuning values.
//!
//! The constants are the policy the page ships with. [`PageConfig`] carries
//! the same values as one copyable struct so the wiring can be handed a single
//! configuration and tests can pin alternative values explicitly.

use crate::reveal::Threshold;

/// Look-ahead added to the scroll offset before comparing it with section tops.
pub const SCROLL_BIAS: f32 = 200.0;
/// Visible fraction of a skill card required before its bar fills.
pub const SKILL_BAR_THRESHOLD: Threshold = Threshold::new(0.5);
/// Visible fraction of a section wrapper required before it fades in.
pub const SECTION_THRESHOLD: Threshold = Threshold::new(0.1);
/// Downward offset of a concealed section, in CSS pixels.
pub const REVEAL_OFFSET: f32 = 30.0;
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
/// Scroll offset past which the navbar switches to its solid background.
pub const NAVBAR_SOLID_AFTER: f32 = 50.0;
pub const TYPING_START_DELAY_MS: u32 = 500;
pub const TYPING_STEP_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    pub scroll_bias: f32,
    pub skill_bar_threshold: Threshold,
    pub section_threshold: Threshold,
    pub navbar_solid_after: f32,
    pub typing_start_delay_ms: u32,
    pub typing_step_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_bias: SCROLL_BIAS,
            skill_bar_threshold: SKILL_BAR_THRESHOLD,
            section_threshold: SECTION_THRESHOLD,
            navbar_solid_after: NAVBAR_SOLID_AFTER,
            typing_start_delay_ms: TYPING_START_DELAY_MS,
            typing_step_ms: TYPING_STEP_MS,
        }
    }
}

impl PageConfig {
    pub const fn with_scroll_bias(mut self, scroll_bias: f32) -> Self {
        self.scroll_bias = scroll_bias;
        self
    }

    pub const fn with_skill_bar_threshold(mut self, threshold: Threshold) -> Self {
        self.skill_bar_threshold = threshold;
        self
    }

    pub const fn with_section_threshold(mut self, threshold: Threshold) -> Self {
        self.section_threshold = threshold;
        self
    }

    pub const fn with_navbar_solid_after(mut self, navbar_solid_after: f32) -> Self {
        self.navbar_solid_after = navbar_solid_after;
        self
    }

    pub const fn with_typing_delays(mut self, start_delay_ms: u32, step_ms: u32) -> Self {
        self.typing_start_delay_ms = start_delay_ms;
        self.typing_step_ms = step_ms;
        self
    }
}
