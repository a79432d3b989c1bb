//! Client-side contact form check. Nothing is sent anywhere.

pub const THANK_YOU_MESSAGE: &str = "شكراً لك! تم إرسال رسالتك بنجاح. سأتواصل معك قريباً.";
pub const MISSING_FIELDS_MESSAGE: &str = "يرجى ملء جميع الحقول";

/// Raw field values; `None` when the form lacks the field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ContactSubmission<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub subject: Option<&'a str>,
    pub message: Option<&'a str>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormOutcome {
    Accepted,
    MissingFields,
}

impl FormOutcome {
    pub const fn alert_message(self) -> &'static str {
        match self {
            Self::Accepted => THANK_YOU_MESSAGE,
            Self::MissingFields => MISSING_FIELDS_MESSAGE,
        }
    }

    pub const fn resets_form(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Whitespace as a browser trims it, byte order mark included.
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn is_filled(field: Option<&str>) -> bool {
    field.is_some_and(|value| !value.trim_matches(is_blank_char).is_empty())
}

impl ContactSubmission<'_> {
    pub fn validate(&self) -> FormOutcome {
        let fields = [self.name, self.email, self.subject, self.message];
        if fields.into_iter().all(is_filled) {
            FormOutcome::Accepted
        } else {
            FormOutcome::MissingFields
        }
    }
}
