use folio_core::{
    geometry::Bounds,
    reveal::{RevealSink, RevealStyle, TargetId},
};
use web_sys::{HtmlElement, IntersectionObserver};

use crate::{DomError, DomResult};

/// DOM side of one watcher target.
#[derive(Debug, Clone)]
pub struct RevealTarget {
    /// Observed element; receives fade styles.
    pub element: HtmlElement,
    /// Inner bar receiving fill widths, for skill cards.
    pub bar: Option<HtmlElement>,
}

impl RevealTarget {
    pub fn section(element: HtmlElement) -> Self {
        Self { element, bar: None }
    }

    pub fn skill_card(element: HtmlElement, bar: Option<HtmlElement>) -> Self {
        Self { element, bar }
    }

    pub fn viewport_bounds(&self) -> Bounds {
        let rect = self.element.get_bounding_client_rect();
        Bounds::new(rect.top() as f32, rect.height() as f32)
    }
}

/// Targets indexed by [`TargetId`].
#[derive(Debug, Clone)]
pub struct ElementStyles {
    targets: Vec<RevealTarget>,
    transition: Option<&'static str>,
}

impl ElementStyles {
    pub fn new(targets: Vec<RevealTarget>, transition: Option<&'static str>) -> Self {
        Self {
            targets,
            transition,
        }
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    pub fn position(&self, element: &web_sys::Element) -> Option<TargetId> {
        self.targets
            .iter()
            .position(|target| AsRef::<web_sys::Element>::as_ref(&target.element) == element)
            .map(|index| TargetId::new(index as u16))
    }

    /// Sink that also stops `observer` from reporting retired targets.
    pub fn observed<'a>(&'a self, observer: &'a IntersectionObserver) -> ObservedStyles<'a> {
        ObservedStyles {
            styles: self,
            observer: Some(observer),
        }
    }

    pub fn unobserved(&self) -> ObservedStyles<'_> {
        ObservedStyles {
            styles: self,
            observer: None,
        }
    }

    fn draw(&self, target: TargetId, style: RevealStyle) -> DomResult<()> {
        let Some(target) = self.targets.get(target.index()) else {
            return Ok(());
        };

        match style {
            RevealStyle::Fill { width_pct } => {
                if let Some(bar) = &target.bar {
                    bar.style()
                        .set_property("width", &format!("{width_pct}%"))?;
                }
            }
            RevealStyle::Fade { opacity, offset_y } => {
                let css = target.element.style();
                if let Some(transition) = self.transition {
                    css.set_property("transition", transition)?;
                }
                css.set_property("opacity", &opacity.to_string())?;
                css.set_property("transform", &format!("translateY({offset_y}px)"))?;
            }
        }

        Ok(())
    }
}

pub struct ObservedStyles<'a> {
    styles: &'a ElementStyles,
    observer: Option<&'a IntersectionObserver>,
}

impl RevealSink for ObservedStyles<'_> {
    type Error = DomError;

    fn apply(&mut self, target: TargetId, style: RevealStyle) -> Result<(), Self::Error> {
        self.styles.draw(target, style)
    }

    fn retire(&mut self, target: TargetId) -> Result<(), Self::Error> {
        if let (Some(observer), Some(target)) =
            (self.observer, self.styles.targets.get(target.index()))
        {
            observer.unobserve(&target.element);
        }
        Ok(())
    }
}
