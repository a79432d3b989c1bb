//! In-page anchor handling for smooth scrolling.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnchorAction<'a> {
    /// Let the browser handle the click.
    FollowDefault,
    /// Cancel the click and scroll the element matching `selector` into view.
    ScrollTo { selector: &'a str },
}

pub fn resolve_anchor(href: &str) -> AnchorAction<'_> {
    match href {
        "#" => AnchorAction::FollowDefault,
        selector if selector.starts_with('#') => AnchorAction::ScrollTo { selector },
        _ => AnchorAction::FollowDefault,
    }
}
