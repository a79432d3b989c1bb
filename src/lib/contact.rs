use folio_core::contact::{ContactSubmission, FormOutcome};
use folio_dom::{
    DomResult,
    events::listen,
    platform::document::{Page, query_all_within, query_within},
};
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::CONTACT_FORM;

const TEXT_INPUTS: &str = "input[type=\"text\"]";
const EMAIL_INPUT: &str = "input[type=\"email\"]";
const MESSAGE_INPUT: &str = "textarea";

pub(crate) fn init_contact_form(page: &Page) -> DomResult<()> {
    let Some(form) = page.query(CONTACT_FORM)? else {
        debug!("contact: form missing");
        return Ok(());
    };
    let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
        debug!("contact: {CONTACT_FORM} is not a form");
        return Ok(());
    };

    let handle = page.clone();
    let submitted = form.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        match submit(&handle, &submitted) {
            Ok(outcome) => debug!("contact: submit outcome={outcome:?}"),
            Err(err) => warn!("contact: submit failed: {err}"),
        }
    })?;

    info!("contact: form ready");
    Ok(())
}

fn submit(page: &Page, form: &HtmlFormElement) -> DomResult<FormOutcome> {
    // Name and subject are the first and second plain text inputs.
    let text_inputs = query_all_within(form, TEXT_INPUTS)?;
    let name = text_inputs.first().and_then(input_value);
    let subject = text_inputs.get(1).and_then(input_value);
    let email = query_within(form, EMAIL_INPUT)?
        .as_ref()
        .and_then(input_value);
    let message = query_within(form, MESSAGE_INPUT)?
        .and_then(|element| element.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|textarea| textarea.value());

    let outcome = ContactSubmission {
        name: name.as_deref(),
        email: email.as_deref(),
        subject: subject.as_deref(),
        message: message.as_deref(),
    }
    .validate();

    page.alert(outcome.alert_message())?;
    if outcome.resets_form() {
        form.reset();
    }

    Ok(outcome)
}

fn input_value(element: &Element) -> Option<String> {
    element.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value)
}
