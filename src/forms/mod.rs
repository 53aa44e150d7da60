//! Form controllers for the contact and booking forms.
//!
//! A submitted form is parsed into its raw string fields, validated into a
//! typed submission, forwarded to the backend exactly once, and answered with
//! a [`Notice`] that is rendered above the re-filled form.

mod booking;
mod contact;

pub use booking::{submit_booking, BookingForm, BookingSubmission};
pub use contact::{submit_contact, ContactForm, ContactSubmission};

use crate::api::{response_message, ApiError};
use crate::i18n::LanguageStrings;
use chrono::NaiveDate;
use maud::{html, Markup};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// Form fields, shared by both forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Date,
    GroupSize,
    Program,
    Notes,
}

impl Field {
    /// The field's form and JSON key.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
            Field::Date => "date",
            Field::GroupSize => "group_size",
            Field::Program => "program",
            Field::Notes => "notes",
        }
    }

    pub fn label(&self, strings: &LanguageStrings) -> &'static str {
        match self {
            Field::Name => strings.label_name,
            Field::Email => strings.label_email,
            Field::Subject => strings.label_subject,
            Field::Message => strings.label_message,
            Field::Date => strings.label_date,
            Field::GroupSize => strings.label_group_size,
            Field::Program => strings.label_program,
            Field::Notes => strings.label_notes,
        }
    }
}

/// Why a submitted form was not forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("required field '{}' is empty", .0.key())]
    Required(Field),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("date is not in YYYY-MM-DD format")]
    InvalidDate,
    #[error("group size must be a whole number of at least 1")]
    InvalidGroupSize,
}

impl FieldError {
    pub fn localized(&self, strings: &LanguageStrings) -> String {
        match self {
            FieldError::Required(field) => strings
                .validation_required
                .replace("{field}", field.label(strings)),
            FieldError::InvalidEmail => strings.validation_email.to_string(),
            FieldError::InvalidDate => strings.validation_date.to_string(),
            FieldError::InvalidGroupSize => strings.validation_group_size.to_string(),
        }
    }
}

/// Message shown to the user after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Confirmation(String),
    Failure {
        message: String,
        /// Server-supplied explanation, shown after the localized message
        detail: Option<String>,
    },
}

impl Notice {
    /// Confirmation from a success payload, falling back to `default`.
    pub fn from_success(payload: Option<&Value>, default: &str) -> Self {
        Notice::Confirmation(response_message(payload).unwrap_or_else(|| default.to_string()))
    }

    pub fn from_api_error(error: &ApiError, strings: &LanguageStrings) -> Self {
        Notice::Failure {
            message: strings.submission_failed.to_string(),
            detail: error.server_message().map(str::to_string),
        }
    }

    pub fn from_field_error(error: FieldError, strings: &LanguageStrings) -> Self {
        Notice::Failure {
            message: error.localized(strings),
            detail: None,
        }
    }

    pub fn render(&self) -> Markup {
        match self {
            Notice::Confirmation(message) => html! {
                div class="notice notice-success mt-4 text-emerald-700" role="status" { (message) }
            },
            Notice::Failure { message, detail } => html! {
                div class="notice notice-error mt-4 text-red-700" role="alert" {
                    (message)
                    @if let Some(detail) = detail {
                        " " span class="notice-detail" { (detail) }
                    }
                }
            },
        }
    }
}

/// Log a failed forward without any personal data.
fn log_api_failure(form: &str, lang: &str, error: &ApiError) {
    warn!("{} submission failed (lang={}): {}", form, lang, error);
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Trimmed value of a required field.
fn required(field: Field, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(field));
    }
    Ok(trimmed.to_string())
}

/// Required email with a local part and a domain.
fn required_email(value: &str) -> Result<String, FieldError> {
    let email = required(Field::Email, value)?;
    let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap());
    if !regex.is_match(&email) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(email)
}

/// Required calendar date in `YYYY-MM-DD` form.
fn required_date(value: &str) -> Result<String, FieldError> {
    let date = required(Field::Date, value)?;
    NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| FieldError::InvalidDate)?;
    Ok(date)
}

/// Required positive integer (min 1, no ceiling).
fn required_group_size(value: &str) -> Result<u32, FieldError> {
    let raw = required(Field::GroupSize, value)?;
    match raw.parse::<u32>() {
        Ok(size) if size >= 1 => Ok(size),
        _ => Err(FieldError::InvalidGroupSize),
    }
}

/// Submit button that disables itself while the POST is in flight.
fn submit_button(label: &str) -> Markup {
    html! {
        button type="submit" class="bg-emerald-600 hover:bg-emerald-700 text-white px-4 py-2 rounded-md" { (label) }
    }
}

/// `onsubmit` handler guarding against double submission.
const DISABLE_ON_SUBMIT: &str = "this.querySelector('button[type=submit]').disabled = true";
