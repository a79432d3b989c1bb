use super::*;
use crate::config::{SECTION_THRESHOLD, SKILL_BAR_THRESHOLD};

#[derive(Default)]
struct RecordingSink {
    applied: std::vec::Vec<(TargetId, RevealStyle)>,
    retired: std::vec::Vec<TargetId>,
}

impl RevealSink for RecordingSink {
    type Error = ();

    fn apply(&mut self, target: TargetId, style: RevealStyle) -> Result<(), Self::Error> {
        self.applied.push((target, style));
        Ok(())
    }

    fn retire(&mut self, target: TargetId) -> Result<(), Self::Error> {
        self.retired.push(target);
        Ok(())
    }
}

struct FailingSink;

impl RevealSink for FailingSink {
    type Error = &'static str;

    fn apply(&mut self, _target: TargetId, _style: RevealStyle) -> Result<(), Self::Error> {
        Err("style rejected")
    }
}

fn visible(index: u16, ratio: f32) -> VisibilitySignal {
    VisibilitySignal::new(TargetId::new(index), ratio, true)
}

fn hidden(index: u16) -> VisibilitySignal {
    VisibilitySignal::new(TargetId::new(index), 0.0, false)
}

fn sections(count: usize) -> VisibilityWatcher {
    let mut watcher = VisibilityWatcher::new();
    watcher.register(core::iter::repeat_n(TargetKind::Section, count), SECTION_THRESHOLD);
    watcher
}

#[test]
fn empty_registration_is_a_no_op() {
    let mut watcher: VisibilityWatcher = VisibilityWatcher::new();
    let result = watcher.register(core::iter::empty(), SKILL_BAR_THRESHOLD);

    assert_eq!(
        result,
        RegisterResult {
            first: TargetId::new(0),
            registered: 0,
            truncated: false,
        }
    );
    assert!(watcher.is_empty());

    let mut sink = RecordingSink::default();
    assert_eq!(watcher.dispatch([visible(0, 1.0)], &mut sink), Ok(0));
    assert!(sink.applied.is_empty());
}

#[test]
fn second_group_ids_continue_after_first() {
    let mut watcher: VisibilityWatcher = VisibilityWatcher::new();
    watcher.register([TargetKind::Section; 3], SECTION_THRESHOLD);
    let skills = watcher.register(
        [TargetKind::SkillBar {
            level_pct: Some(80),
        }],
        SKILL_BAR_THRESHOLD,
    );

    assert_eq!(skills.first, TargetId::new(3));
    assert_eq!(skills.registered, 1);
    assert_eq!(watcher.len(), 4);
    assert_eq!(
        watcher.slot(TargetId::new(3)).map(|slot| slot.threshold),
        Some(SKILL_BAR_THRESHOLD)
    );
}

#[test]
fn registration_beyond_capacity_is_truncated() {
    let mut watcher: VisibilityWatcher<2> = VisibilityWatcher::new();
    let result = watcher.register([TargetKind::Section; 3], SECTION_THRESHOLD);

    assert_eq!(result.registered, 2);
    assert!(result.truncated);
    assert_eq!(watcher.len(), 2);
}

#[test]
fn default_capacity_fits_a_long_page() {
    let mut watcher: VisibilityWatcher = VisibilityWatcher::new();
    let skills = watcher.register(
        core::iter::repeat_n(TargetKind::SkillBar { level_pct: Some(80) }, 60),
        SKILL_BAR_THRESHOLD,
    );
    let wrappers = watcher.register(core::iter::repeat_n(TargetKind::Section, 40), SECTION_THRESHOLD);

    assert!(!skills.truncated);
    assert!(!wrappers.truncated);
    assert_eq!(wrappers.first, TargetId::new(60));
    assert_eq!(watcher.len(), 100);
}

#[test]
fn threshold_gates_reveal_inclusively() {
    let mut watcher: VisibilityWatcher = VisibilityWatcher::new();
    watcher.register(
        [TargetKind::SkillBar {
            level_pct: Some(90),
        }],
        SKILL_BAR_THRESHOLD,
    );
    let mut sink = RecordingSink::default();

    assert_eq!(watcher.dispatch([visible(0, 0.49)], &mut sink), Ok(0));
    assert!(!watcher.is_revealed(TargetId::new(0)));

    assert_eq!(watcher.dispatch([visible(0, 0.5)], &mut sink), Ok(1));
    assert!(watcher.is_revealed(TargetId::new(0)));
    assert_eq!(
        sink.applied,
        [(TargetId::new(0), RevealStyle::Fill { width_pct: 90 })]
    );
}

#[test]
fn non_intersecting_signal_never_reveals() {
    let mut watcher = sections(1);
    let mut sink = RecordingSink::default();

    let signal = VisibilitySignal::new(TargetId::new(0), 1.0, false);
    assert_eq!(watcher.dispatch([signal], &mut sink), Ok(0));
    assert!(!watcher.is_revealed(TargetId::new(0)));
}

#[test]
fn reveal_is_monotonic_across_out_of_order_signals() {
    let mut watcher = sections(2);
    let mut sink = RecordingSink::default();

    let batches = [
        [visible(1, 0.3), hidden(0)],
        [hidden(1), visible(0, 0.05)],
        [visible(1, 1.0), hidden(1)],
        [hidden(0), visible(0, 0.8)],
    ];

    let mut revealed_so_far = 0;
    for batch in batches {
        watcher.dispatch(batch, &mut sink).unwrap();
        let revealed_now = watcher.revealed_count();
        assert!(revealed_now >= revealed_so_far);
        revealed_so_far = revealed_now;
    }

    assert!(watcher.is_revealed(TargetId::new(0)));
    assert!(watcher.is_revealed(TargetId::new(1)));
    // One style write and one retire per target, no matter how many signals.
    assert_eq!(sink.applied.len(), 2);
    assert_eq!(sink.retired, [TargetId::new(1), TargetId::new(0)]);
}

#[test]
fn section_reveal_clears_opacity_and_offset() {
    let mut watcher = sections(1);
    let mut sink = RecordingSink::default();

    watcher.dispatch([visible(0, 0.1)], &mut sink).unwrap();
    assert_eq!(
        sink.applied,
        [(
            TargetId::new(0),
            RevealStyle::Fade {
                opacity: 1.0,
                offset_y: 0.0,
            }
        )]
    );
}

#[test]
fn skill_bar_without_level_is_revealed_silently() {
    let mut watcher: VisibilityWatcher = VisibilityWatcher::new();
    watcher.register([TargetKind::SkillBar { level_pct: None }], SKILL_BAR_THRESHOLD);
    let mut sink = RecordingSink::default();

    assert_eq!(watcher.dispatch([visible(0, 0.9)], &mut sink), Ok(1));
    assert!(sink.applied.is_empty());
    assert_eq!(sink.retired, [TargetId::new(0)]);
}

#[test]
fn prime_conceals_only_unrevealed_targets() {
    let mut watcher: VisibilityWatcher = VisibilityWatcher::new();
    watcher.register([TargetKind::Section; 2], SECTION_THRESHOLD);
    watcher.register(
        [
            TargetKind::SkillBar {
                level_pct: Some(40),
            },
            TargetKind::SkillBar { level_pct: None },
        ],
        SKILL_BAR_THRESHOLD,
    );
    watcher
        .dispatch([visible(1, 1.0)], &mut RecordingSink::default())
        .unwrap();

    let mut sink = RecordingSink::default();
    watcher.prime(&mut sink).unwrap();

    assert_eq!(
        sink.applied,
        [
            (
                TargetId::new(0),
                RevealStyle::Fade {
                    opacity: 0.0,
                    offset_y: REVEAL_OFFSET,
                }
            ),
            (TargetId::new(2), RevealStyle::Fill { width_pct: 0 }),
        ]
    );
}

#[test]
fn unknown_targets_are_ignored() {
    let mut watcher = sections(1);
    let mut sink = RecordingSink::default();

    assert_eq!(watcher.dispatch([visible(7, 1.0)], &mut sink), Ok(0));
    assert!(sink.applied.is_empty());
}

#[test]
fn failed_style_write_leaves_target_unrevealed() {
    let mut watcher = sections(1);

    assert_eq!(
        watcher.dispatch([visible(0, 1.0)], &mut FailingSink),
        Err("style rejected")
    );
    assert!(!watcher.is_revealed(TargetId::new(0)));
}

#[test]
fn reset_allows_a_target_to_reveal_again() {
    let mut watcher = sections(2);
    let mut sink = RecordingSink::default();
    watcher
        .dispatch([visible(0, 1.0), visible(1, 1.0)], &mut sink)
        .unwrap();

    watcher.reset(TargetId::new(0));
    assert!(!watcher.is_revealed(TargetId::new(0)));
    assert!(watcher.is_revealed(TargetId::new(1)));

    assert_eq!(watcher.dispatch([visible(0, 1.0)], &mut sink), Ok(1));

    watcher.reset_all();
    assert_eq!(watcher.revealed_count(), 0);
}

#[test]
fn decision_is_pure() {
    let slot = TargetSlot {
        kind: TargetKind::Section,
        threshold: Threshold::new(0.1),
        revealed: false,
    };
    let signal = visible(0, 0.2);

    assert_eq!(
        reveal_decision(&slot, &signal),
        reveal_decision(&slot, &signal)
    );
    assert!(!slot.revealed);

    let revealed = TargetSlot {
        revealed: true,
        ..slot
    };
    assert_eq!(reveal_decision(&revealed, &signal), RevealDecision::Skip);
}

#[test]
fn threshold_is_clamped() {
    assert_eq!(Threshold::new(-0.2).fraction(), 0.0);
    assert_eq!(Threshold::new(1.7).fraction(), 1.0);
    assert_eq!(Threshold::new(f32::NAN).fraction(), 0.0);
}

#[test]
fn levels_are_parsed_leniently() {
    assert_eq!(parse_level("85"), Some(85));
    assert_eq!(parse_level(" 72.5 "), Some(72));
    assert_eq!(parse_level("60%"), Some(60));
    assert_eq!(parse_level("140"), Some(100));
    assert_eq!(parse_level("-5"), Some(0));
    assert_eq!(parse_level(""), None);
    assert_eq!(parse_level("high"), None);
    assert_eq!(parse_level("inf"), None);
}
