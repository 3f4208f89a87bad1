// src/services/validation.rs

//! Field-level validation rules shared by the apply and enrollment forms.
//!
//! Each field reports at most one error: the first rule it fails.
//! Lengths are counted in grapheme clusters.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Form fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    FullName,
    Email,
    Phone,
    CourseInterest,
    Consent,
    Course,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::FullName => "Full name",
            Field::Email => "Email",
            Field::Phone => "Phone number",
            Field::CourseInterest => "Course",
            Field::Consent => "Consent",
            Field::Course => "Selected course",
        }
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ValidationError {
    Required,
    TooLong { max: usize },
    TooShort { min: usize },
    InvalidFormat,
    NotAccepted,
}

/// A validation failure on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub error: ValidationError,
}

impl FieldError {
    pub fn new(field: Field, error: ValidationError) -> Self {
        Self { field, error }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.field, self.error) {
            (Field::Consent, ValidationError::NotAccepted | ValidationError::Required) => {
                f.write_str("You must accept the terms")
            }
            (Field::CourseInterest, ValidationError::Required) => {
                f.write_str("Please select a course")
            }
            (Field::Course, _) => f.write_str("No course selected"),
            (field, ValidationError::Required) => write!(f, "{} is required", field.label()),
            (Field::Phone, ValidationError::TooLong { .. }) => f.write_str("Too long"),
            (_, ValidationError::TooLong { max }) => write!(f, "Max {max} characters"),
            (field, ValidationError::TooShort { min }) => {
                write!(f, "{} must be at least {min} characters", field.label())
            }
            (field, ValidationError::InvalidFormat) => {
                write!(f, "Invalid {}", field.label().to_lowercase())
            }
            (field, ValidationError::NotAccepted) => write!(f, "{} must be accepted", field.label()),
        }
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+]?[0-9\s\-()]+$").expect("phone pattern is valid"))
}

/// Length in user-perceived characters.
pub fn char_len(value: &str) -> usize {
    value.graphemes(true).count()
}

/// Whether the value looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value.trim())
}

/// Required value that must be non-blank and at most `max` characters.
pub fn required_max(field: Field, value: &str, max: usize) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::new(field, ValidationError::Required));
    }
    max_len(field, value, max)
}

/// Required value that must be non-blank and at least `min` characters.
pub fn required_min(field: Field, value: &str, min: usize) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::new(field, ValidationError::Required));
    }
    if char_len(value) < min {
        return Some(FieldError::new(field, ValidationError::TooShort { min }));
    }
    None
}

/// Optional value capped at `max` characters.
pub fn max_len(field: Field, value: &str, max: usize) -> Option<FieldError> {
    if char_len(value) > max {
        return Some(FieldError::new(field, ValidationError::TooLong { max }));
    }
    None
}

/// Required email address.
pub fn email(field: Field, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::new(field, ValidationError::Required));
    }
    if !is_valid_email(value) {
        return Some(FieldError::new(field, ValidationError::InvalidFormat));
    }
    None
}

/// Required phone number made of digits, spaces, dashes and parentheses.
pub fn phone(field: Field, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::new(field, ValidationError::Required));
    }
    if !phone_regex().is_match(value) {
        return Some(FieldError::new(field, ValidationError::InvalidFormat));
    }
    None
}

/// Required free-text selection.
pub fn required(field: Field, value: &str) -> Option<FieldError> {
    value
        .trim()
        .is_empty()
        .then(|| FieldError::new(field, ValidationError::Required))
}

/// Checkbox that must be ticked.
pub fn accepted(field: Field, value: bool) -> Option<FieldError> {
    (!value).then(|| FieldError::new(field, ValidationError::NotAccepted))
}
