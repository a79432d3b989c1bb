use folio_core::{
    config::{PageConfig, REVEAL_TRANSITION},
    reveal::{MAX_REVEAL_TARGETS, TargetKind, Threshold, VisibilityWatcher, parse_level},
};
use folio_dom::{
    DomResult,
    events::intersection::{RevealBinding, feed_reveals},
    platform::document::{Page, html_element, query_within},
    render::style::{ElementStyles, RevealTarget},
};
use log::debug;

use crate::{SECTION_WRAPPERS, SKILL_BAR, SKILL_CARDS, SKILL_LEVEL_ATTR};

pub(crate) fn init_skill_bars(page: &Page, config: &PageConfig) -> DomResult<()> {
    let mut kinds = Vec::new();
    let mut targets = Vec::new();

    for card in page.query_all(SKILL_CARDS)? {
        let bar = query_within(&card, SKILL_BAR)?;
        let level_pct = bar
            .as_ref()
            .and_then(|bar| bar.get_attribute(SKILL_LEVEL_ATTR))
            .and_then(|raw| parse_level(&raw));
        let Some(card) = html_element(card) else {
            continue;
        };

        kinds.push(TargetKind::SkillBar { level_pct });
        targets.push(RevealTarget::skill_card(card, bar.and_then(html_element)));
    }

    reveal(page, kinds, targets, config.skill_bar_threshold, None, "skills")
}

pub(crate) fn init_scroll_animations(page: &Page, config: &PageConfig) -> DomResult<()> {
    let targets: Vec<RevealTarget> = page
        .query_all(SECTION_WRAPPERS)?
        .into_iter()
        .filter_map(html_element)
        .map(RevealTarget::section)
        .collect();
    let kinds = vec![TargetKind::Section; targets.len()];

    reveal(
        page,
        kinds,
        targets,
        config.section_threshold,
        Some(REVEAL_TRANSITION),
        "sections",
    )
}

fn reveal(
    page: &Page,
    kinds: Vec<TargetKind>,
    mut targets: Vec<RevealTarget>,
    threshold: Threshold,
    transition: Option<&'static str>,
    label: &'static str,
) -> DomResult<()> {
    if targets.is_empty() {
        debug!("reveal: {label} has no targets");
        return Ok(());
    }

    let mut watcher = VisibilityWatcher::<MAX_REVEAL_TARGETS>::new();
    let registered = watcher.register(kinds, threshold);
    targets.truncate(usize::from(registered.registered));

    let binding = RevealBinding {
        watcher,
        styles: ElementStyles::new(targets, transition),
    };
    feed_reveals(page, binding, threshold, label)?;
    Ok(())
}
