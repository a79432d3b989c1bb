pub mod links;
pub mod style;

use web_sys::Element;

use crate::DomResult;

pub const ACTIVE_CLASS: &str = "active";

pub fn set_class(element: &Element, class: &str, enabled: bool) -> DomResult<()> {
    let classes = element.class_list();
    if enabled {
        classes.add_1(class)?;
    } else {
        classes.remove_1(class)?;
    }
    Ok(())
}
