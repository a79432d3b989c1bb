use folio_core::{
    config::PageConfig,
    typing::{TypeStep, Typewriter},
};
use folio_dom::{
    DomResult,
    events::set_timeout,
    platform::document::Page,
};
use log::{debug, info, warn};
use web_sys::Element;

use crate::HERO_TITLE;

pub(crate) fn init_typing_effect(page: &Page, config: &PageConfig) -> DomResult<()> {
    let Some(title) = page.query(HERO_TITLE)? else {
        debug!("typing: hero title missing");
        return Ok(());
    };

    let text = title.text_content().unwrap_or_default();
    let writer = Typewriter::new(
        &text,
        config.typing_start_delay_ms,
        config.typing_step_ms,
    );
    title.set_text_content(Some(""));

    info!("typing: chars={}", writer.text().chars().count());
    let delay_ms = writer.start_delay_ms();
    schedule(page.clone(), title, writer, delay_ms)
}

fn schedule(page: Page, title: Element, mut writer: Typewriter, delay_ms: u32) -> DomResult<()> {
    let window = page.window().clone();
    set_timeout(&window, delay_ms, move || {
        let TypeStep::Typed(visible) = writer.step() else {
            debug!("typing: finished");
            return;
        };
        title.set_text_content(Some(visible));

        let step_ms = writer.step_ms();
        if let Err(err) = schedule(page, title, writer, step_ms) {
            warn!("typing: next step not scheduled: {err}");
        }
    })
}
