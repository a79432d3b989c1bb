//! Feeds intersection reports into a [`VisibilityWatcher`].
//!
//! `IntersectionObserver` is used when the host has it. Otherwise the
//! targets are measured on every scroll tick and the ratios computed here.

use std::{cell::RefCell, rc::Rc};

use folio_core::{
    geometry::intersection_ratio,
    reveal::{TargetId, Threshold, VisibilitySignal, VisibilityWatcher},
};
use js_sys::Array;
use log::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::listen;
use crate::{DomResult, platform::document::Page, render::style::ElementStyles};

pub struct RevealBinding<const N: usize> {
    pub watcher: VisibilityWatcher<N>,
    pub styles: ElementStyles,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeedKind {
    Observer,
    ScrollFallback,
}

/// Conceal every target, then start delivering visibility signals.
pub fn feed_reveals<const N: usize>(
    page: &Page,
    binding: RevealBinding<N>,
    threshold: Threshold,
    label: &'static str,
) -> DomResult<FeedKind> {
    binding.watcher.prime(&mut binding.styles.unobserved())?;

    let shared = Rc::new(RefCell::new(binding));
    let kind = match intersection_observer(&shared, threshold, label) {
        Ok(observer) => {
            for target in shared.borrow().styles.targets() {
                observer.observe(&target.element);
            }
            FeedKind::Observer
        }
        Err(err) => {
            warn!("reveal-dom: {label} observer unavailable, measuring on scroll: {err}");
            scroll_fallback(page, &shared, label)?;
            FeedKind::ScrollFallback
        }
    };

    info!(
        "reveal-dom: {label} targets={} threshold={} feed={kind:?}",
        shared.borrow().watcher.len(),
        threshold.fraction()
    );
    Ok(kind)
}

fn intersection_observer<const N: usize>(
    shared: &Rc<RefCell<RevealBinding<N>>>,
    threshold: Threshold,
    label: &'static str,
) -> DomResult<IntersectionObserver> {
    let binding = Rc::clone(shared);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let mut binding = binding.borrow_mut();
            let RevealBinding { watcher, styles } = &mut *binding;

            let signals: Vec<VisibilitySignal> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = styles.position(&entry.target())?;
                    Some(VisibilitySignal::new(
                        target,
                        entry.intersection_ratio() as f32,
                        entry.is_intersecting(),
                    ))
                })
                .collect();

            match watcher.dispatch(signals, &mut styles.observed(&observer)) {
                Ok(0) => {}
                Ok(revealed) => debug!("reveal-dom: {label} revealed={revealed}"),
                Err(err) => warn!("reveal-dom: {label} dispatch failed: {err}"),
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(f64::from(threshold.fraction())));
    options.set_root_margin("0px");

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

fn scroll_fallback<const N: usize>(
    page: &Page,
    shared: &Rc<RefCell<RevealBinding<N>>>,
    label: &'static str,
) -> DomResult<()> {
    let probe_page = page.clone();
    let binding = Rc::clone(shared);
    let probe = move || {
        let viewport_height = match probe_page.viewport_height() {
            Ok(height) => height,
            Err(err) => {
                warn!("reveal-dom: {label} viewport unavailable: {err}");
                return;
            }
        };

        let mut binding = binding.borrow_mut();
        let RevealBinding { watcher, styles } = &mut *binding;
        let signals: Vec<VisibilitySignal> = styles
            .targets()
            .iter()
            .enumerate()
            .map(|(index, target)| (TargetId::new(index as u16), target.viewport_bounds()))
            .filter(|(target, _)| !watcher.is_revealed(*target))
            .map(|(target, bounds)| {
                VisibilitySignal::new(
                    target,
                    intersection_ratio(bounds, viewport_height),
                    bounds.intersects(viewport_height),
                )
            })
            .collect();

        if let Err(err) = watcher.dispatch(signals, &mut styles.unobserved()) {
            warn!("reveal-dom: {label} dispatch failed: {err}");
        }
    };

    probe();
    listen(page.window(), "scroll", move |_| probe())
}
