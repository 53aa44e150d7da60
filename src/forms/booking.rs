use crate::api::ApiClient;
use crate::forms::{
    log_api_failure, required, required_date, required_email, required_group_size, submit_button,
    Field, FieldError, Notice, DISABLE_ON_SUBMIT,
};
use crate::i18n::Language;
use crate::metrics::SiteMetrics;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Raw booking form fields as submitted by the browser.
///
/// `group_size` stays a string until validation so an unparseable value can
/// be echoed back into the form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub date: String,
    pub group_size: String,
    pub program: String,
    pub notes: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            date: String::new(),
            group_size: "1".to_string(),
            program: String::new(),
            notes: String::new(),
        }
    }
}

/// Validated booking request sent to `POST /api/booking`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSubmission {
    pub name: String,
    pub email: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub group_size: u32,
    pub program: String,
    /// Optional; sent as an empty string when left blank
    pub notes: String,
    pub lang: Language,
}

impl BookingForm {
    pub fn validate(&self, lang: Language) -> Result<BookingSubmission, FieldError> {
        Ok(BookingSubmission {
            name: required(Field::Name, &self.name)?,
            email: required_email(&self.email)?,
            date: required_date(&self.date)?,
            group_size: required_group_size(&self.group_size)?,
            program: required(Field::Program, &self.program)?,
            notes: self.notes.trim().to_string(),
            lang,
        })
    }

    pub fn render(&self, lang: Language, notice: Option<&Notice>) -> Markup {
        let strings = lang.strings();

        html! {
            div class="booking-form max-w-xl" {
                h2 class="text-xl font-semibold mb-3" { (strings.booking_heading) }
                form method="post" class="space-y-3" onsubmit=(DISABLE_ON_SUBMIT) {
                    div class="grid grid-cols-1 md:grid-cols-2 gap-3" {
                        div {
                            label class="block text-sm mb-1" for="name" { (Field::Name.label(strings)) }
                            input id="name" name="name" type="text" required value=(self.name)
                                class="w-full border rounded-md p-2";
                        }
                        div {
                            label class="block text-sm mb-1" for="email" { (Field::Email.label(strings)) }
                            input id="email" name="email" type="email" required value=(self.email)
                                class="w-full border rounded-md p-2";
                        }
                    }
                    div class="grid grid-cols-1 md:grid-cols-2 gap-3" {
                        div {
                            label class="block text-sm mb-1" for="date" { (Field::Date.label(strings)) }
                            input id="date" name="date" type="date" required value=(self.date)
                                class="w-full border rounded-md p-2";
                        }
                        div {
                            label class="block text-sm mb-1" for="group_size" { (Field::GroupSize.label(strings)) }
                            input id="group_size" name="group_size" type="number" min="1" step="1" required
                                value=(self.group_size) class="w-full border rounded-md p-2";
                        }
                    }
                    div {
                        label class="block text-sm mb-1" for="program" { (Field::Program.label(strings)) }
                        textarea id="program" name="program" required rows="4"
                            class="w-full border rounded-md p-2" { (self.program) }
                    }
                    div {
                        label class="block text-sm mb-1" for="notes" { (Field::Notes.label(strings)) }
                        textarea id="notes" name="notes" rows="3"
                            class="w-full border rounded-md p-2" { (self.notes) }
                    }
                    (submit_button(strings.send_button))
                }
                @if let Some(notice) = notice {
                    (notice.render())
                }
            }
        }
    }
}

/// Validate and forward a booking form; at most one backend call.
pub async fn submit_booking(api: &ApiClient, lang: Language, form: &BookingForm) -> Notice {
    let strings = lang.strings();
    let metrics = SiteMetrics::global();

    let submission = match form.validate(lang) {
        Ok(submission) => submission,
        Err(e) => {
            info!("Booking form rejected (lang={}): {}", lang, e);
            metrics.record_validation_rejection();
            return Notice::from_field_error(e, strings);
        }
    };

    metrics.record_booking_submission();
    match api.booking(&submission).await {
        Ok(payload) => {
            info!(
                "Booking submission accepted (lang={}, group_size={})",
                lang, submission.group_size
            );
            Notice::from_success(payload.as_ref(), strings.booking_confirmation)
        }
        Err(e) => {
            metrics.record_submission_failure();
            log_api_failure("Booking", lang.code(), &e);
            Notice::from_api_error(&e, strings)
        }
    }
}
