use crate::api::ApiClient;
use crate::forms::{
    log_api_failure, required, required_email, submit_button, Field, FieldError, Notice,
    DISABLE_ON_SUBMIT,
};
use crate::i18n::Language;
use crate::metrics::SiteMetrics;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Raw contact form fields as submitted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Validated contact request sent to `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub lang: Language,
}

impl ContactForm {
    pub fn validate(&self, lang: Language) -> Result<ContactSubmission, FieldError> {
        Ok(ContactSubmission {
            name: required(Field::Name, &self.name)?,
            email: required_email(&self.email)?,
            subject: required(Field::Subject, &self.subject)?,
            message: required(Field::Message, &self.message)?,
            lang,
        })
    }

    /// The form, pre-filled with the current values, and the notice of the
    /// last submit if any.
    pub fn render(&self, lang: Language, notice: Option<&Notice>) -> Markup {
        let strings = lang.strings();

        html! {
            div class="contact-form max-w-xl" {
                h1 class="text-2xl font-semibold mb-4" { (strings.contact_heading) }
                form method="post" class="space-y-3" onsubmit=(DISABLE_ON_SUBMIT) {
                    @for (field, value) in [(Field::Name, &self.name), (Field::Email, &self.email), (Field::Subject, &self.subject)] {
                        div {
                            label class="block text-sm mb-1" for=(field.key()) { (field.label(strings)) }
                            input id=(field.key()) name=(field.key())
                                type=(if field == Field::Email { "email" } else { "text" })
                                required value=(value)
                                class="w-full border rounded-md p-2";
                        }
                    }
                    div {
                        label class="block text-sm mb-1" for="message" { (Field::Message.label(strings)) }
                        textarea id="message" name="message" required rows="5"
                            class="w-full border rounded-md p-2" { (self.message) }
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

/// Validate and forward a contact form; at most one backend call.
pub async fn submit_contact(api: &ApiClient, lang: Language, form: &ContactForm) -> Notice {
    let strings = lang.strings();
    let metrics = SiteMetrics::global();

    let submission = match form.validate(lang) {
        Ok(submission) => submission,
        Err(e) => {
            info!("Contact form rejected (lang={}): {}", lang, e);
            metrics.record_validation_rejection();
            return Notice::from_field_error(e, strings);
        }
    };

    metrics.record_contact_submission();
    match api.contact(&submission).await {
        Ok(payload) => {
            info!("Contact submission accepted (lang={})", lang);
            Notice::from_success(payload.as_ref(), strings.contact_confirmation)
        }
        Err(e) => {
            metrics.record_submission_failure();
            log_api_failure("Contact", lang.code(), &e);
            Notice::from_api_error(&e, strings)
        }
    }
}
