//! One-shot reveal of page regions as they scroll into view.
//!
//! Targets live in a fixed-capacity registry and are addressed by the
//! [`TargetId`] handed out at registration. A target is revealed the first
//! time a [`VisibilitySignal`] for it meets its threshold; later signals for
//! the same target are ignored, whichever order the host delivers them in.

use heapless::Vec;
use log::{debug, warn};

use crate::config::REVEAL_OFFSET;

pub const MAX_REVEAL_TARGETS: usize = 128;

/// Minimum visible fraction of a target, clamped to `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Threshold(f32);

impl Threshold {
    pub const fn new(fraction: f32) -> Self {
        // Also catches NaN.
        if !(fraction >= 0.0) {
            Self(0.0)
        } else if fraction > 1.0 {
            Self(1.0)
        } else {
            Self(fraction)
        }
    }

    pub const fn fraction(self) -> f32 {
        self.0
    }
}

/// Registry handle for one observed target.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TargetId(u16);

impl TargetId {
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TargetKind {
    /// Skill card whose inner bar fills to `level_pct` on reveal.
    SkillBar { level_pct: Option<u8> },
    /// Section wrapper that fades and slides into place.
    Section,
}

impl TargetKind {
    /// Style applied before observation starts.
    pub const fn concealed_style(self) -> Option<RevealStyle> {
        match self {
            Self::SkillBar { level_pct: Some(_) } => Some(RevealStyle::Fill { width_pct: 0 }),
            Self::SkillBar { level_pct: None } => None,
            Self::Section => Some(RevealStyle::Fade {
                opacity: 0.0,
                offset_y: REVEAL_OFFSET,
            }),
        }
    }

    pub const fn revealed_style(self) -> Option<RevealStyle> {
        match self {
            Self::SkillBar { level_pct } => match level_pct {
                Some(width_pct) => Some(RevealStyle::Fill { width_pct }),
                None => None,
            },
            Self::Section => Some(RevealStyle::Fade {
                opacity: 1.0,
                offset_y: 0.0,
            }),
        }
    }
}

/// Visual state written to a target by a [`RevealSink`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealStyle {
    /// 0..=100
    Fill { width_pct: u8 },
    Fade { opacity: f32, offset_y: f32 },
}

/// One intersection report for a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilitySignal {
    pub target: TargetId,
    pub ratio: f32,
    pub intersecting: bool,
}

impl VisibilitySignal {
    pub const fn new(target: TargetId, ratio: f32, intersecting: bool) -> Self {
        Self {
            target,
            ratio,
            intersecting,
        }
    }

    pub fn meets(&self, threshold: Threshold) -> bool {
        self.intersecting && self.ratio >= threshold.fraction()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetSlot {
    pub kind: TargetKind,
    pub threshold: Threshold,
    pub revealed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealDecision {
    Skip,
    /// Reveal the target; `None` when the target has nothing to draw.
    Reveal(Option<RevealStyle>),
}

/// Decide what a signal does to a slot without touching any state.
pub fn reveal_decision(slot: &TargetSlot, signal: &VisibilitySignal) -> RevealDecision {
    if slot.revealed || !signal.meets(slot.threshold) {
        return RevealDecision::Skip;
    }

    RevealDecision::Reveal(slot.kind.revealed_style())
}

/// Parse a declared fill level such as `"85"` or `" 72.5 "`.
///
/// Values are clamped to `0..=100` and fractional parts are dropped.
pub fn parse_level(raw: &str) -> Option<u8> {
    let value = raw.trim().trim_end_matches('%').trim_end().parse::<f32>().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(value.clamp(0.0, 100.0) as u8)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegisterResult {
    pub first: TargetId,
    pub registered: u16,
    pub truncated: bool,
}

/// Host surface that draws reveal styles.
pub trait RevealSink {
    type Error;

    fn apply(&mut self, target: TargetId, style: RevealStyle) -> Result<(), Self::Error>;

    /// Called once a target has been revealed; hosts may stop observing it.
    fn retire(&mut self, _target: TargetId) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub struct VisibilityWatcher<const N: usize = MAX_REVEAL_TARGETS> {
    slots: Vec<TargetSlot, N>,
}

impl<const N: usize> Default for VisibilityWatcher<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> VisibilityWatcher<N> {
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Append `targets` to the registry, all sharing `threshold`.
    ///
    /// Targets beyond the registry capacity are dropped and reported through
    /// [`RegisterResult::truncated`].
    pub fn register<I>(&mut self, targets: I, threshold: Threshold) -> RegisterResult
    where
        I: IntoIterator<Item = TargetKind>,
    {
        let first = TargetId::new(self.slots.len() as u16);
        let mut registered = 0u16;
        let mut truncated = false;

        for kind in targets {
            let slot = TargetSlot {
                kind,
                threshold,
                revealed: false,
            };
            if self.slots.push(slot).is_err() {
                truncated = true;
                break;
            }
            registered += 1;
        }

        if registered == 0 && !truncated {
            debug!("reveal: register skipped, no targets");
        } else {
            debug!(
                "reveal: registered first={} count={} threshold={}",
                first.index(),
                registered,
                threshold.fraction()
            );
        }
        if truncated {
            warn!(
                "reveal: registry full capacity={} registered={}",
                N, registered
            );
        }

        RegisterResult {
            first,
            registered,
            truncated,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, target: TargetId) -> Option<&TargetSlot> {
        self.slots.get(target.index())
    }

    pub fn is_revealed(&self, target: TargetId) -> bool {
        self.slot(target).is_some_and(|slot| slot.revealed)
    }

    pub fn revealed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.revealed).count()
    }

    pub fn reset(&mut self, target: TargetId) {
        if let Some(slot) = self.slots.get_mut(target.index()) {
            slot.revealed = false;
        }
    }

    pub fn reset_all(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.revealed = false;
        }
    }

    /// Draw the concealed style on every target that is not yet revealed.
    pub fn prime<S: RevealSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.revealed {
                continue;
            }
            if let Some(style) = slot.kind.concealed_style() {
                sink.apply(TargetId::new(index as u16), style)?;
            }
        }

        Ok(())
    }

    /// Apply one batch of signals. Returns how many targets were newly revealed.
    pub fn dispatch<I, S>(&mut self, signals: I, sink: &mut S) -> Result<u16, S::Error>
    where
        I: IntoIterator<Item = VisibilitySignal>,
        S: RevealSink,
    {
        let mut newly_revealed = 0u16;

        for signal in signals {
            let Some(slot) = self.slots.get_mut(signal.target.index()) else {
                debug!("reveal: unknown target={}", signal.target.index());
                continue;
            };

            let RevealDecision::Reveal(style) = reveal_decision(slot, &signal) else {
                continue;
            };

            if let Some(style) = style {
                sink.apply(signal.target, style)?;
            }
            slot.revealed = true;
            newly_revealed += 1;
            debug!(
                "reveal: target={} ratio={} kind={:?}",
                signal.target.index(),
                signal.ratio,
                slot.kind
            );

            sink.retire(signal.target)?;
        }

        Ok(newly_revealed)
    }
}

#[cfg(test)]
mod tests;
