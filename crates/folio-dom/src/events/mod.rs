pub mod intersection;
pub mod scroll;

use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{Event, EventTarget, Window};

use crate::DomResult;

/// Attach `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> DomResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Never removed; the host keeps the only reference.
    closure.forget();
    Ok(())
}

pub fn set_timeout<F>(window: &Window, delay_ms: u32, callback: F) -> DomResult<()>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(callback);
    let delay_ms = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    )?;
    Ok(())
}
