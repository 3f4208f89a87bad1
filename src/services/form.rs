// src/services/form.rs

//! Course application form.
//!
//! Holds the applicant's name, email and phone for the selected course.
//! Errors are recomputed on every change; submission is only possible while
//! the error list is empty.

use crate::error::{AppError, Result};
use crate::models::{ApplicationSubmission, CourseRecord, FormConfig};
use crate::services::validation::{self, Field, FieldError, ValidationError};

/// Apply-modal form state.
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    limits: FormConfig,
    name: String,
    email: String,
    phone: String,
    errors: Vec<FieldError>,
}

impl ApplicationForm {
    pub fn new(limits: FormConfig) -> Self {
        let mut form = Self {
            limits,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            errors: Vec::new(),
        };
        form.revalidate();
        form
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.revalidate();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.revalidate();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
        self.revalidate();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Current field errors, in field order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Error for one field, if any.
    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Clear all fields.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.revalidate();
    }

    /// Build the submission for a course, or the field errors blocking it.
    pub fn to_submission(&self, course: Option<&CourseRecord>) -> Result<ApplicationSubmission> {
        let mut errors = self.validate();
        let Some(course) = course else {
            errors.push(FieldError::new(Field::Course, ValidationError::Required));
            return Err(AppError::Validation(errors));
        };
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let phone = self.phone.trim();
        Ok(ApplicationSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            course_id: course.id,
            course_title: course.title.clone(),
            institution: course.institution.clone(),
        })
    }

    /// Run every field rule against the current values.
    pub fn validate(&self) -> Vec<FieldError> {
        [
            validation::required_max(Field::Name, &self.name, self.limits.name_max_len),
            validation::email(Field::Email, &self.email),
            validation::max_len(Field::Phone, &self.phone, self.limits.phone_max_len),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn revalidate(&mut self) {
        self.errors = self.validate();
    }
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}
