use folio_core::tracker::ActiveSectionTracker;
use log::{info, warn};
use web_sys::Element;

use super::listen;
use crate::{
    DomResult,
    platform::document::{Page, offset_top},
    render::links::LinkClasses,
};

/// Call `handler` with the vertical scroll offset on every scroll event.
pub fn on_scroll<F>(page: &Page, mut handler: F) -> DomResult<()>
where
    F: FnMut(f32) + 'static,
{
    let handle = page.clone();
    listen(page.window(), "scroll", move |_| match handle.scroll_y() {
        Ok(scroll_y) => handler(scroll_y),
        Err(err) => warn!("scroll: offset unavailable: {err}"),
    })
}

pub struct SectionBinding<const S: usize, const L: usize> {
    pub tracker: ActiveSectionTracker<S, L>,
    /// Section elements in registration order.
    pub sections: Vec<Element>,
    pub links: LinkClasses,
}

/// Re-measure section tops and reconcile the nav highlight on every tick.
pub fn track_sections<const S: usize, const L: usize>(
    page: &Page,
    binding: SectionBinding<S, L>,
) -> DomResult<()> {
    info!(
        "nav-dom: tracking sections={} links={}",
        binding.tracker.sections().len(),
        binding.tracker.links().len()
    );

    let mut binding = binding;
    on_scroll(page, move |scroll_y| {
        let SectionBinding {
            tracker,
            sections,
            links,
        } = &mut binding;

        for (index, element) in sections.iter().enumerate() {
            tracker.set_section_top(index, offset_top(element));
        }
        if let Err(err) = tracker.on_scroll(scroll_y, links) {
            warn!("nav-dom: highlight failed: {err}");
        }
    })
}
