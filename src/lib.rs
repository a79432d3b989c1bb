//! Interactivity for the portfolio page, compiled to WebAssembly.
//!
//! Loading the module runs [`start`], which wires every page behavior once
//! the document is parsed:
//!
//! ```javascript
//! import init, { initLogging } from './folio.js';
//!
//! await init();
//! initLogging('debug');
//! ```

use folio_core::config::PageConfig;
use folio_dom::{DomResult, events::listen, platform::document::Page};
use log::{LevelFilter, info, warn};
use wasm_bindgen::prelude::*;

#[path = "lib/contact.rs"]
mod contact;
#[path = "lib/navbar.rs"]
mod navbar;
#[path = "lib/navigation.rs"]
mod navigation;
#[path = "lib/reveal.rs"]
mod reveal;
#[path = "lib/typing.rs"]
mod typing;

const HAMBURGER: &str = ".hamburger";
const NAV_MENU: &str = ".nav-menu";
const NAV_LINKS: &str = ".nav-menu a";
const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
const NAVBAR: &str = ".navbar";
const SKILL_CARDS: &str = ".skill-card";
const SKILL_BAR: &str = ".skill-bar";
const SKILL_LEVEL_ATTR: &str = "data-level";
const CONTACT_FORM: &str = ".contact-form";
const SECTION_WRAPPERS: &str = "section > .container";
const HERO_TITLE: &str = ".name";
const ID_SECTIONS: &str = "section[id]";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // The logger passes everything; `initLogging` moves the global filter.
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    log::set_max_level(DEFAULT_LOG_LEVEL);

    let page = Page::current()?;
    let config = PageConfig::default();

    if page.is_loading() {
        let ready_page = page.clone();
        listen(page.document(), "DOMContentLoaded", move |_| {
            init_modules(&ready_page, config)
        })?;
    } else {
        init_modules(&page, config);
    }

    Ok(())
}

/// Set the log level: `"off"`, `"error"`, `"warn"`, `"info"`, `"debug"` or
/// `"trace"`. Unknown names fall back to `"info"`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let filter = match level.to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => DEFAULT_LOG_LEVEL,
    };

    log::set_max_level(filter);
    info!("page: log level={filter}");
}

fn init_modules(page: &Page, config: PageConfig) {
    report("navigation", navigation::init_navigation(page));
    report("smooth-scroll", navigation::init_smooth_scrolling(page));
    report("navbar", navbar::init_navbar_scroll(page, &config));
    report("skill-bars", reveal::init_skill_bars(page, &config));
    report("contact-form", contact::init_contact_form(page));
    report("scroll-animations", reveal::init_scroll_animations(page, &config));
    report("typing", typing::init_typing_effect(page, &config));
    report("active-link", navigation::init_active_nav_link(page, &config));
    info!("page: modules initialized");
}

fn report(module: &str, result: DomResult<()>) {
    if let Err(err) = result {
        warn!("page: {module} failed to start: {err}");
    }
}
