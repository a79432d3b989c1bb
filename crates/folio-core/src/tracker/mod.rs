//! Navigation highlight that follows the section currently scrolled past.
//!
//! Each scroll tick resolves the current section from the registered section
//! tops, then reconciles the nav links so that at most one is active.

use alloc::string::String;

use heapless::Vec;
use log::{debug, warn};

use crate::config::SCROLL_BIAS;

pub const MAX_SECTIONS: usize = 64;
pub const MAX_NAV_LINKS: usize = 64;

fn section_id(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    Some(String::from(raw))
}

/// Target identifier of an in-page link: `"#about"` -> `"about"`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// `None` for an empty id; such a section still occupies its slot but
    /// no link can match it.
    id: Option<String>,
    top: f32,
}

impl Section {
    pub fn new(id: &str, top: f32) -> Self {
        Self {
            id: section_id(id),
            top,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn top(&self) -> f32 {
        self.top
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavLink {
    target: Option<String>,
    active: bool,
}

impl NavLink {
    pub fn from_href(href: &str) -> Self {
        Self {
            target: fragment_target(href).and_then(section_id),
            active: false,
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Index of the last section, in document order, whose top is at or above
/// `scroll_y + bias`.
pub fn current_section(sections: &[Section], scroll_y: f32, bias: f32) -> Option<usize> {
    let line = scroll_y + bias;
    let mut current = None;

    for (index, section) in sections.iter().enumerate() {
        if section.top <= line {
            current = Some(index);
        }
    }

    current
}

/// Deactivate every link, then activate the first one pointing at `current`.
pub fn reconcile(links: &mut [NavLink], current: Option<&str>) -> Option<usize> {
    for link in links.iter_mut() {
        link.active = false;
    }

    let current = current?;
    let index = links
        .iter()
        .position(|link| link.target() == Some(current))?;
    links[index].active = true;
    Some(index)
}

/// Host surface for the link `active` class.
pub trait LinkHighlighter {
    type Error;

    fn set_active(&mut self, link: usize, active: bool) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrackerLoadResult {
    pub sections: u16,
    pub links: u16,
    pub truncated: bool,
}

impl TrackerLoadResult {
    const EMPTY: Self = Self {
        sections: 0,
        links: 0,
        truncated: false,
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollUpdate {
    pub section: Option<usize>,
    pub previous: Option<usize>,
    pub active: Option<usize>,
}

impl ScrollUpdate {
    pub fn changed(&self) -> bool {
        self.previous != self.active
    }
}

pub struct ActiveSectionTracker<const S: usize = MAX_SECTIONS, const L: usize = MAX_NAV_LINKS> {
    sections: Vec<Section, S>,
    links: Vec<NavLink, L>,
    bias: f32,
    active: Option<usize>,
}

impl<const S: usize, const L: usize> Default for ActiveSectionTracker<S, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const S: usize, const L: usize> ActiveSectionTracker<S, L> {
    pub const fn new() -> Self {
        Self::with_bias(SCROLL_BIAS)
    }

    pub const fn with_bias(bias: f32) -> Self {
        Self {
            sections: Vec::new(),
            links: Vec::new(),
            bias,
            active: None,
        }
    }

    /// Load sections `(id, top)` in document order and nav link hrefs.
    ///
    /// Nothing is loaded unless both lists are non-empty. Entries past the
    /// capacity are dropped and reported through
    /// [`TrackerLoadResult::truncated`].
    pub fn register<'a, IS, IL>(&mut self, sections: IS, links: IL) -> TrackerLoadResult
    where
        IS: IntoIterator<Item = (&'a str, f32)>,
        IL: IntoIterator<Item = &'a str>,
    {
        let mut staged_sections = Vec::<Section, S>::new();
        let mut staged_links = Vec::<NavLink, L>::new();
        let mut truncated = false;

        for (id, top) in sections {
            if staged_sections.push(Section::new(id, top)).is_err() {
                truncated = true;
                break;
            }
        }
        for href in links {
            if staged_links.push(NavLink::from_href(href)).is_err() {
                truncated = true;
                break;
            }
        }

        if staged_sections.is_empty() || staged_links.is_empty() {
            debug!(
                "nav-track: register skipped sections={} links={}",
                staged_sections.len(),
                staged_links.len()
            );
            return TrackerLoadResult::EMPTY;
        }

        if truncated {
            warn!(
                "nav-track: registry full section_capacity={} link_capacity={}",
                S, L
            );
        }

        let result = TrackerLoadResult {
            sections: staged_sections.len() as u16,
            links: staged_links.len() as u16,
            truncated,
        };
        self.sections = staged_sections;
        self.links = staged_links;
        self.active = None;
        debug!(
            "nav-track: registered sections={} links={} bias={}",
            result.sections, result.links, self.bias
        );

        result
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active_link(&self) -> Option<usize> {
        self.active
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Record a new layout position for a section. Returns `false` for an
    /// unknown index.
    pub fn set_section_top(&mut self, index: usize, top: f32) -> bool {
        match self.sections.get_mut(index) {
            Some(section) => {
                section.top = top;
                true
            }
            None => false,
        }
    }

    pub fn on_scroll<H: LinkHighlighter>(
        &mut self,
        scroll_y: f32,
        highlighter: &mut H,
    ) -> Result<ScrollUpdate, H::Error> {
        let section = current_section(&self.sections, scroll_y, self.bias);
        let current_id = section.and_then(|index| self.sections[index].id());
        let previous = self.active;
        let active = reconcile(&mut self.links, current_id);
        self.active = active;

        for index in 0..self.links.len() {
            highlighter.set_active(index, false)?;
        }
        if let Some(index) = active {
            highlighter.set_active(index, true)?;
        }

        let update = ScrollUpdate {
            section,
            previous,
            active,
        };
        if update.changed() {
            debug!(
                "nav-track: scroll_y={} section={:?} link {:?} -> {:?}",
                scroll_y, current_id, previous, active
            );
        }

        Ok(update)
    }
}
