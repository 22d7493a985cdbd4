//! Contact-form validation.
//!
//! All rules are evaluated on every submission attempt; errors accumulate
//! per field rather than short-circuiting, so the shell can fill every error
//! slot at once. A `Submission` is only constructed when every rule passes.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use regex::Regex;

/// How the visitor prefers to be contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMode {
    Phone,
    Email,
    Other,
}

impl ContactMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMode::Phone => "phone",
            ContactMode::Email => "email",
            ContactMode::Other => "other",
        }
    }
}

/// Form fields, named to match the page's error-slot contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Phone,
    Email,
    Comments,
    ContactMethod,
}

/// Raw form contents as submitted, before any validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub comments: String,
    #[serde(rename = "contactMethod", default)]
    pub mode: Option<ContactMode>,
}

/// Why a field was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", missing_message(.0))]
    MissingRequiredField(Field),
    #[error("{}", format_message(.0))]
    InvalidFormat(Field),
    #[error("Select a preferred contact method.")]
    MissingSelection,
}

impl ValidationError {
    /// The field whose error slot should show this message.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingRequiredField(f) | ValidationError::InvalidFormat(f) => *f,
            ValidationError::MissingSelection => Field::ContactMethod,
        }
    }
}

fn missing_message(field: &Field) -> &'static str {
    match field {
        Field::Name => "Full name is required.",
        Field::Comments => "Comments are required.",
        Field::Phone => "Phone is required if you prefer phone contact.",
        Field::Email => "Email is required if you prefer email contact.",
        Field::ContactMethod => "Select a preferred contact method.",
    }
}

fn format_message(field: &Field) -> &'static str {
    match field {
        Field::Phone => "Enter a valid 10-digit phone number.",
        Field::Email => "Enter a valid email address.",
        _ => "Invalid value.",
    }
}

/// A per-field error ready for the shell to place next to its input.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl From<ValidationError> for FieldError {
    fn from(err: ValidationError) -> Self {
        FieldError {
            field: err.field(),
            message: err.to_string(),
        }
    }
}

/// A fully validated submission. Built only when every rule passes and
/// discarded after the confirmation is rendered — nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub comments: String,
    pub mode: ContactMode,
}

impl Submission {
    /// Thank-you message rendered into the submission slot.
    pub fn confirmation(&self) -> String {
        format!(
            "Thank you, <strong>{}</strong>!<br>\
             We will contact you via <strong>{}</strong>.<br>\
             Your message: \"{}\"",
            self.name,
            self.mode.as_str(),
            self.comments
        )
    }
}

fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{10}$").expect("valid phone pattern"))
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Check every rule against the (trimmed) input. Errors are cumulative.
pub fn validate(input: &ContactInput) -> Result<Submission, Vec<ValidationError>> {
    let name = input.name.trim();
    let phone = input.phone.trim();
    let email = input.email.trim();
    let comments = input.comments.trim();

    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(ValidationError::MissingRequiredField(Field::Name));
    }
    if comments.is_empty() {
        errors.push(ValidationError::MissingRequiredField(Field::Comments));
    }

    match input.mode {
        None => errors.push(ValidationError::MissingSelection),
        Some(ContactMode::Phone) => {
            if phone.is_empty() {
                errors.push(ValidationError::MissingRequiredField(Field::Phone));
            } else if !phone_pattern().is_match(phone) {
                errors.push(ValidationError::InvalidFormat(Field::Phone));
            }
        }
        Some(ContactMode::Email) => {
            if email.is_empty() {
                errors.push(ValidationError::MissingRequiredField(Field::Email));
            } else if !email_pattern().is_match(email) {
                errors.push(ValidationError::InvalidFormat(Field::Email));
            }
        }
        Some(ContactMode::Other) => {}
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Submission {
        name: name.to_owned(),
        phone: phone.to_owned(),
        email: email.to_owned(),
        comments: comments.to_owned(),
        // mode checked Some above
        mode: input.mode.unwrap_or(ContactMode::Other),
    })
}

/// Outcome handed back to the shell as JSON: either a confirmation message
/// or the list of field errors to display.
#[derive(Debug, Clone, Serialize)]
pub struct ContactReport {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub errors: Vec<FieldError>,
}

/// Validate and convert the result into a shell-facing report.
pub fn submit(input: &ContactInput) -> ContactReport {
    match validate(input) {
        Ok(submission) => {
            log::info!("contact form accepted (mode: {})", submission.mode.as_str());
            ContactReport {
                ok: true,
                message: Some(submission.confirmation()),
                errors: Vec::new(),
            }
        }
        Err(errors) => {
            log::debug!("contact form rejected with {} error(s)", errors.len());
            ContactReport {
                ok: false,
                message: None,
                errors: errors.into_iter().map(FieldError::from).collect(),
            }
        }
    }
}
