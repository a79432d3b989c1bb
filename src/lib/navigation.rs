use std::{cell::Cell, rc::Rc};

use folio_core::{
    anchor::{AnchorAction, resolve_anchor},
    config::PageConfig,
    menu::MobileMenu,
    tracker::ActiveSectionTracker,
};
use folio_dom::{
    DomResult,
    events::{
        listen,
        scroll::{SectionBinding, track_sections},
    },
    platform::document::{Page, offset_top},
    render::{ACTIVE_CLASS, links::LinkClasses, set_class},
};
use log::{debug, info, warn};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::{HAMBURGER, ID_SECTIONS, IN_PAGE_ANCHORS, NAV_LINKS, NAV_MENU};

pub(crate) fn init_navigation(page: &Page) -> DomResult<()> {
    let (Some(hamburger), Some(nav_menu)) = (page.query(HAMBURGER)?, page.query(NAV_MENU)?)
    else {
        debug!("nav: menu elements missing, toggle disabled");
        return Ok(());
    };

    let menu = Rc::new(Cell::new(MobileMenu::new()));
    let drawn = [hamburger.clone(), nav_menu];

    {
        let menu = Rc::clone(&menu);
        let drawn = drawn.clone();
        listen(&hamburger, "click", move |_| {
            let mut state = menu.get();
            let open = state.toggle();
            menu.set(state);
            draw_menu(&drawn, open);
        })?;
    }

    let links = page.query_all(NAV_LINKS)?;
    for link in &links {
        let menu = Rc::clone(&menu);
        let drawn = drawn.clone();
        listen(link, "click", move |_| {
            let mut state = menu.get();
            state.close();
            menu.set(state);
            draw_menu(&drawn, false);
        })?;
    }

    info!("nav: mobile menu ready links={}", links.len());
    Ok(())
}

fn draw_menu(elements: &[Element; 2], open: bool) {
    for element in elements {
        if let Err(err) = set_class(element, ACTIVE_CLASS, open) {
            warn!("nav: menu class update failed: {err}");
        }
    }
}

pub(crate) fn init_smooth_scrolling(page: &Page) -> DomResult<()> {
    let anchors = page.query_all(IN_PAGE_ANCHORS)?;

    for anchor in &anchors {
        let handle = page.clone();
        let clicked = anchor.clone();
        listen(anchor, "click", move |event| {
            let href = clicked.get_attribute("href").unwrap_or_default();
            let AnchorAction::ScrollTo { selector } = resolve_anchor(&href) else {
                return;
            };

            event.prevent_default();
            match handle.query(selector) {
                Ok(Some(target)) => {
                    target.scroll_into_view_with_scroll_into_view_options(&smooth_to_start())
                }
                Ok(None) => debug!("nav: anchor target missing selector={selector}"),
                Err(err) => debug!("nav: anchor selector rejected selector={selector}: {err}"),
            }
        })?;
    }

    info!("nav: smooth scrolling anchors={}", anchors.len());
    Ok(())
}

fn smooth_to_start() -> ScrollIntoViewOptions {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    options
}

pub(crate) fn init_active_nav_link(page: &Page, config: &PageConfig) -> DomResult<()> {
    let mut sections = page.query_all(ID_SECTIONS)?;
    let links = page.query_all(NAV_LINKS)?;
    if sections.is_empty() || links.is_empty() {
        debug!(
            "nav: active link disabled sections={} links={}",
            sections.len(),
            links.len()
        );
        return Ok(());
    }

    let ids: Vec<String> = sections.iter().map(Element::id).collect();
    let links = LinkClasses::new(links);
    let hrefs = links.hrefs();

    let mut tracker: ActiveSectionTracker = ActiveSectionTracker::with_bias(config.scroll_bias);
    let loaded = tracker.register(
        ids.iter()
            .zip(&sections)
            .map(|(id, section)| (id.as_str(), offset_top(section))),
        hrefs.iter().map(String::as_str),
    );
    if loaded.sections == 0 {
        return Ok(());
    }
    sections.truncate(usize::from(loaded.sections));

    track_sections(
        page,
        SectionBinding {
            tracker,
            sections,
            links,
        },
    )
}
