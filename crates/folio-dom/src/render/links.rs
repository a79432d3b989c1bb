use folio_core::tracker::LinkHighlighter;
use web_sys::Element;

use super::{ACTIVE_CLASS, set_class};
use crate::DomError;

/// Nav links in the same order they were registered with the tracker.
#[derive(Debug, Clone)]
pub struct LinkClasses {
    links: Vec<Element>,
}

impl LinkClasses {
    pub fn new(links: Vec<Element>) -> Self {
        Self { links }
    }

    pub fn hrefs(&self) -> Vec<String> {
        self.links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect()
    }
}

impl LinkHighlighter for LinkClasses {
    type Error = DomError;

    fn set_active(&mut self, link: usize, active: bool) -> Result<(), Self::Error> {
        match self.links.get(link) {
            Some(element) => set_class(element, ACTIVE_CLASS, active),
            None => Ok(()),
        }
    }
}
