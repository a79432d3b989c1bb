use folio_core::{config::PageConfig, navbar::NavbarScroll};
use folio_dom::{
    DomResult,
    events::scroll::on_scroll,
    platform::document::{Page, html_element},
};
use log::{debug, info, warn};

use crate::NAVBAR;

pub(crate) fn init_navbar_scroll(page: &Page, config: &PageConfig) -> DomResult<()> {
    let Some(navbar) = page.query(NAVBAR)?.and_then(html_element) else {
        debug!("navbar: element missing");
        return Ok(());
    };

    let mut state = NavbarScroll::new(config.navbar_solid_after);
    info!("navbar: solid after scroll_y={}", config.navbar_solid_after);
    on_scroll(page, move |scroll_y| {
        let Some(tone) = state.on_scroll(scroll_y) else {
            return;
        };
        if let Err(err) = navbar.style().set_property("background", tone.background()) {
            warn!("navbar: background update failed: {err:?}");
        }
    })
}
