//! Submission payloads sent to the enrollment endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Course interest options offered by the contact enrollment form.
pub const COURSE_INTERESTS: &[&str] = &[
    "IELTS Preparation",
    "PTE Coaching",
    "GRE Preparation",
    "GMAT Preparation",
    "Japanese Language (JLPT)",
    "Korean Language (TOPIK)",
    "Study Materials Only",
];

/// Preferred batch timings offered by the contact enrollment form.
pub const PREFERRED_BATCHES: &[&str] = &[
    "Morning (6-8 AM)",
    "Day (10 AM-12 PM)",
    "Evening (5-7 PM)",
    "Weekend Only",
];

/// Current proficiency levels offered by the contact enrollment form.
pub const CURRENT_LEVELS: &[&str] = &[
    "Complete Beginner",
    "Basic Understanding",
    "Intermediate",
    "Advanced",
    "Previously Attempted",
];

/// A validated application for one catalog course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Id of the course being applied to
    pub course_id: u32,
    pub course_title: String,
    pub institution: String,
}

impl ApplicationSubmission {
    /// Stable SHA-256 digest of the submission, used as an idempotency key.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for part in [
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_deref().unwrap_or(""),
            self.course_id.to_string().as_str(),
            self.course_title.as_str(),
            self.institution.as_str(),
        ] {
            hasher.update(part.as_bytes());
            hasher.update([0u8]);
        }
        hex::encode(hasher.finalize())
    }
}

/// Payload accepted by the enrollment endpoint.
///
/// Both the contact page and the per-course apply modal submit this shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub course_interest: String,
    #[serde(default)]
    pub preferred_batch: String,
    #[serde(default)]
    pub current_level: String,
    #[serde(default)]
    pub message: String,
    pub consent: bool,
}

impl EnrollmentRequest {
    /// Optional choices whose value is not one of the offered options.
    ///
    /// Yields `(label, value, options)` for each non-empty field outside
    /// `COURSE_INTERESTS`, `PREFERRED_BATCHES` or `CURRENT_LEVELS`.
    pub fn unlisted_choices(&self) -> Vec<(&'static str, &str, &'static [&'static str])> {
        [
            ("course interest", self.course_interest.as_str(), COURSE_INTERESTS),
            ("batch", self.preferred_batch.as_str(), PREFERRED_BATCHES),
            ("level", self.current_level.as_str(), CURRENT_LEVELS),
        ]
        .into_iter()
        .filter(|(_, value, options)| !value.is_empty() && !options.contains(value))
        .collect()
    }

    /// Stable SHA-256 digest of the request, used as an idempotency key.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for part in [
            self.full_name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.course_interest.as_str(),
            self.preferred_batch.as_str(),
            self.current_level.as_str(),
            self.message.as_str(),
        ] {
            hasher.update(part.as_bytes());
            hasher.update([0u8]);
        }
        hasher.update([self.consent as u8]);
        hex::encode(hasher.finalize())
    }
}

impl From<&ApplicationSubmission> for EnrollmentRequest {
    fn from(app: &ApplicationSubmission) -> Self {
        Self {
            full_name: app.name.clone(),
            email: app.email.clone(),
            phone: app.phone.clone().unwrap_or_default(),
            course_interest: app.course_title.clone(),
            preferred_batch: String::new(),
            current_level: String::new(),
            message: format!(
                "Application for course #{} at {}",
                app.course_id, app.institution
            ),
            // Submitting the apply form is the consent action.
            consent: true,
        }
    }
}

/// Acknowledgement of a delivered submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Idempotency key the submission was sent with
    pub reference: String,
    /// User-facing confirmation text
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(reference: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            message: message.into(),
            submitted_at: Utc::now(),
        }
    }
}
