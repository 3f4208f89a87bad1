// src/services/enrollment.rs

//! Contact-page class enrollment form.

use crate::error::{AppError, Result};
use crate::models::EnrollmentRequest;
use crate::services::validation::{self, Field, FieldError};

const FULL_NAME_MIN_LEN: usize = 2;

/// Enrollment form state, validated on every change.
#[derive(Debug, Clone)]
pub struct EnrollmentForm {
    values: EnrollmentRequest,
    errors: Vec<FieldError>,
}

impl EnrollmentForm {
    pub fn new() -> Self {
        Self::from_values(EnrollmentRequest::default())
    }

    /// Start from pre-filled values.
    pub fn from_values(values: EnrollmentRequest) -> Self {
        let errors = Self::validate(&values);
        Self { values, errors }
    }

    /// Apply a change to the values and revalidate.
    pub fn update(&mut self, change: impl FnOnce(&mut EnrollmentRequest)) {
        change(&mut self.values);
        self.errors = Self::validate(&self.values);
    }

    pub fn values(&self) -> &EnrollmentRequest {
        &self.values
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The request to submit, or the errors blocking it.
    pub fn to_request(&self) -> Result<EnrollmentRequest> {
        if !self.is_valid() {
            return Err(AppError::Validation(self.errors.clone()));
        }
        let mut request = self.values.clone();
        request.full_name = request.full_name.trim().to_string();
        request.email = request.email.trim().to_string();
        request.phone = request.phone.trim().to_string();
        Ok(request)
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn validate(values: &EnrollmentRequest) -> Vec<FieldError> {
        [
            validation::required_min(Field::FullName, &values.full_name, FULL_NAME_MIN_LEN),
            validation::email(Field::Email, &values.email),
            validation::phone(Field::Phone, &values.phone),
            validation::required(Field::CourseInterest, &values.course_interest),
            validation::accepted(Field::Consent, values.consent),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Default for EnrollmentForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validation::ValidationError;

    fn complete() -> EnrollmentForm {
        let mut form = EnrollmentForm::new();
        form.update(|v| {
            v.full_name = "Bikash Thapa".into();
            v.email = "bikash@example.com".into();
            v.phone = "+977-9800000000".into();
            v.course_interest = "PTE Coaching".into();
            v.consent = true;
        });
        form
    }

    #[test]
    fn test_empty_form_lists_all_required() {
        let form = EnrollmentForm::new();
        let fields: Vec<Field> = form.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::FullName,
                Field::Email,
                Field::Phone,
                Field::CourseInterest,
                Field::Consent
            ]
        );
    }

    #[test]
    fn test_complete_form_is_valid() {
        let form = complete();
        assert!(form.is_valid());
        let request = form.to_request().unwrap();
        assert_eq!(request.course_interest, "PTE Coaching");
        assert!(request.preferred_batch.is_empty());
    }

    #[test]
    fn test_consent_required() {
        let mut form = complete();
        form.update(|v| v.consent = false);
        assert_eq!(
            form.errors(),
            &[FieldError::new(Field::Consent, ValidationError::NotAccepted)]
        );
        assert!(form.to_request().is_err());
    }

    #[test]
    fn test_short_name_and_bad_phone() {
        let mut form = complete();
        form.update(|v| {
            v.full_name = "B".into();
            v.phone = "ring me".into();
        });
        assert_eq!(
            form.errors(),
            &[
                FieldError::new(Field::FullName, ValidationError::TooShort { min: 2 }),
                FieldError::new(Field::Phone, ValidationError::InvalidFormat),
            ]
        );
    }

    #[test]
    fn test_clear() {
        let mut form = complete();
        form.clear();
        assert_eq!(form.values(), &EnrollmentRequest::default());
        assert!(!form.is_valid());
    }
}
