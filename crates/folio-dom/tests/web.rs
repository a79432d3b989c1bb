//! Browser-side checks for the DOM sinks and feeds.
//! Run with: wasm-pack test --headless --firefox crates/folio-dom

#![cfg(target_arch = "wasm32")]

use folio_core::{
    config::{REVEAL_TRANSITION, SECTION_THRESHOLD},
    reveal::{RevealSink, RevealStyle, TargetId, TargetKind, VisibilityWatcher},
    tracker::{ActiveSectionTracker, LinkHighlighter},
};
use folio_dom::{
    events::intersection::{FeedKind, RevealBinding, feed_reveals},
    platform::document::Page,
    render::{
        ACTIVE_CLASS,
        links::LinkClasses,
        style::{ElementStyles, RevealTarget},
    },
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn page() -> Page {
    Page::current().unwrap()
}

fn attach(page: &Page, tag: &str) -> HtmlElement {
    let element = page
        .document()
        .create_element(tag)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    page.document()
        .body()
        .unwrap()
        .append_child(&element)
        .unwrap();
    element
}

fn css(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap()
}

fn has_active(element: &Element) -> bool {
    element.class_list().contains(ACTIVE_CLASS)
}

#[wasm_bindgen_test]
fn page_is_parsed_when_tests_run() {
    let page = page();
    assert!(!page.is_loading());
}

#[wasm_bindgen_test]
fn section_fade_writes_opacity_offset_and_transition() {
    let page = page();
    let wrapper = attach(&page, "div");
    let styles = ElementStyles::new(
        vec![RevealTarget::section(wrapper.clone())],
        Some(REVEAL_TRANSITION),
    );
    let mut sink = styles.unobserved();

    sink.apply(
        TargetId::new(0),
        RevealStyle::Fade {
            opacity: 0.0,
            offset_y: 30.0,
        },
    )
    .unwrap();
    assert_eq!(css(&wrapper, "opacity"), "0");
    assert_eq!(css(&wrapper, "transform"), "translateY(30px)");
    assert!(!css(&wrapper, "transition").is_empty());

    sink.apply(
        TargetId::new(0),
        RevealStyle::Fade {
            opacity: 1.0,
            offset_y: 0.0,
        },
    )
    .unwrap();
    assert_eq!(css(&wrapper, "opacity"), "1");
    assert_eq!(css(&wrapper, "transform"), "translateY(0px)");
}

#[wasm_bindgen_test]
fn skill_fill_sets_bar_width_without_transition() {
    let page = page();
    let card = attach(&page, "div");
    let bar = attach(&page, "div");
    let styles = ElementStyles::new(
        vec![RevealTarget::skill_card(card.clone(), Some(bar.clone()))],
        None,
    );

    styles
        .unobserved()
        .apply(TargetId::new(0), RevealStyle::Fill { width_pct: 85 })
        .unwrap();

    assert_eq!(css(&bar, "width"), "85%");
    assert_eq!(css(&card, "transition"), "");
    assert_eq!(css(&card, "opacity"), "");
}

#[wasm_bindgen_test]
fn styles_for_unknown_targets_are_ignored() {
    let page = page();
    let wrapper = attach(&page, "div");
    let styles = ElementStyles::new(vec![RevealTarget::section(wrapper.clone())], None);

    styles
        .unobserved()
        .apply(
            TargetId::new(5),
            RevealStyle::Fade {
                opacity: 1.0,
                offset_y: 0.0,
            },
        )
        .unwrap();
    assert_eq!(css(&wrapper, "opacity"), "");
}

#[wasm_bindgen_test]
fn observed_elements_map_back_to_their_target() {
    let page = page();
    let first = attach(&page, "div");
    let second = attach(&page, "div");
    let stranger = attach(&page, "div");
    let styles = ElementStyles::new(
        vec![
            RevealTarget::section(first.clone()),
            RevealTarget::section(second.clone()),
        ],
        None,
    );

    assert_eq!(styles.position(&first), Some(TargetId::new(0)));
    assert_eq!(styles.position(&second), Some(TargetId::new(1)));
    assert_eq!(styles.position(&stranger), None);
}

#[wasm_bindgen_test]
fn targets_are_concealed_before_observation_starts() {
    let page = page();
    let wrappers = [attach(&page, "div"), attach(&page, "div")];
    let mut watcher = VisibilityWatcher::<4>::new();
    watcher.register([TargetKind::Section; 2], SECTION_THRESHOLD);
    let binding = RevealBinding {
        watcher,
        styles: ElementStyles::new(
            wrappers.iter().cloned().map(RevealTarget::section).collect(),
            Some(REVEAL_TRANSITION),
        ),
    };

    let kind = feed_reveals(&page, binding, SECTION_THRESHOLD, "web-test").unwrap();

    // Observer callbacks are queued, so only the priming pass has run.
    assert_eq!(kind, FeedKind::Observer);
    for wrapper in &wrappers {
        assert_eq!(css(wrapper, "opacity"), "0");
        assert_eq!(css(wrapper, "transform"), "translateY(30px)");
    }
}

#[wasm_bindgen_test]
fn link_classes_toggle_active() {
    let page = page();
    let anchors: Vec<Element> = ["#home", "#about"]
        .into_iter()
        .map(|href| {
            let anchor = attach(&page, "a");
            anchor.set_attribute("href", href).unwrap();
            Element::from(anchor)
        })
        .collect();
    let mut links = LinkClasses::new(anchors.clone());

    assert_eq!(links.hrefs(), ["#home", "#about"]);

    links.set_active(1, true).unwrap();
    assert!(!has_active(&anchors[0]));
    assert!(has_active(&anchors[1]));

    links.set_active(1, false).unwrap();
    assert!(!has_active(&anchors[1]));

    links.set_active(7, true).unwrap();
}

#[wasm_bindgen_test]
fn tracker_highlights_through_link_classes() {
    let page = page();
    let anchors: Vec<Element> = ["#home", "#about", "#contact"]
        .into_iter()
        .map(|href| {
            let anchor = attach(&page, "a");
            anchor.set_attribute("href", href).unwrap();
            Element::from(anchor)
        })
        .collect();
    let mut links = LinkClasses::new(anchors.clone());
    let hrefs = links.hrefs();
    let mut tracker: ActiveSectionTracker = ActiveSectionTracker::new();
    tracker.register(
        [("home", 0.0), ("about", 500.0), ("contact", 1200.0)],
        hrefs.iter().map(String::as_str),
    );

    tracker.on_scroll(650.0, &mut links).unwrap();
    let active: Vec<bool> = anchors.iter().map(has_active).collect();
    assert_eq!(active, [false, true, false]);

    tracker.on_scroll(1100.0, &mut links).unwrap();
    let active: Vec<bool> = anchors.iter().map(has_active).collect();
    assert_eq!(active, [false, false, true]);
}
