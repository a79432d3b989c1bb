use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::{DomError, DomResult};

/// Handle to the window and document the page scripts run against.
#[derive(Debug, Clone)]
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    pub fn current() -> DomResult<Self> {
        let window = web_sys::window().ok_or(DomError::MissingWindow)?;
        let document = window.document().ok_or(DomError::MissingDocument)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    pub fn query(&self, selector: &str) -> DomResult<Option<Element>> {
        Ok(self.document.query_selector(selector)?)
    }

    pub fn query_all(&self, selector: &str) -> DomResult<Vec<Element>> {
        Ok(elements(self.document.query_selector_all(selector)?))
    }

    pub fn scroll_y(&self) -> DomResult<f32> {
        Ok(self.window.scroll_y()? as f32)
    }

    pub fn viewport_height(&self) -> DomResult<f32> {
        let height = self.window.inner_height()?;
        Ok(height.as_f64().unwrap_or(0.0) as f32)
    }

    pub fn alert(&self, message: &str) -> DomResult<()> {
        Ok(self.window.alert_with_message(message)?)
    }
}

pub fn query_within(root: &Element, selector: &str) -> DomResult<Option<Element>> {
    Ok(root.query_selector(selector)?)
}

pub fn query_all_within(root: &Element, selector: &str) -> DomResult<Vec<Element>> {
    Ok(elements(root.query_selector_all(selector)?))
}

pub fn html_element(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

/// Document-relative top of `element`, as laid out right now.
pub fn offset_top(element: &Element) -> f32 {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.offset_top() as f32,
        None => 0.0,
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
