// src/services/dispatch.rs

//! Single-flight submission with an email fallback.
//!
//! A `Dispatcher` sends at most one request at a time. A failed attempt never
//! leaves the user stuck: it yields a pre-filled `mailto:` link instead.
//!
//! The dispatcher also publishes a `SubmitStatus` over a `watch` channel, so
//! a UI holding a shared handle sees `Loading` while a request is pending.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use crate::error::{AppError, Result};
use crate::models::{EnrollmentRequest, SubmissionReceipt};
use crate::services::submit::Submitter;
use crate::utils::mailto;

/// Subject used for contact-page enrollment fallbacks.
pub const ENROLLMENT_SUBJECT: &str = "Class Enrollment Request";

/// Subject used for course application fallbacks.
pub const APPLICATION_SUBJECT: &str = "Course Application Request";

/// Result of one dispatch attempt.
#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    /// The submitter accepted the request
    Delivered(SubmissionReceipt),
    /// Delivery failed; the user can send the prepared email instead
    Fallback { error: String, mailto: String },
}

impl DispatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered(_))
    }
}

/// User-visible submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Succeeded(String),
    FellBack(String),
}

impl SubmitStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmitStatus::Loading)
    }

    /// Status line shown under the submit button.
    pub fn message(&self) -> &str {
        match self {
            SubmitStatus::Idle => "",
            SubmitStatus::Loading => "Sending...",
            SubmitStatus::Succeeded(message) => message,
            SubmitStatus::FellBack(_) => "Opening your email client...",
        }
    }
}

impl From<&DispatchOutcome> for SubmitStatus {
    fn from(outcome: &DispatchOutcome) -> Self {
        match outcome {
            DispatchOutcome::Delivered(receipt) => SubmitStatus::Succeeded(receipt.message.clone()),
            DispatchOutcome::Fallback { mailto, .. } => SubmitStatus::FellBack(mailto.clone()),
        }
    }
}

/// Held while a request is pending; clears the flag on every exit path.
struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Sends requests through a submitter, one at a time.
pub struct Dispatcher {
    submitter: Arc<dyn Submitter>,
    fallback_email: String,
    in_flight: AtomicBool,
    status: watch::Sender<SubmitStatus>,
}

impl Dispatcher {
    pub fn new(submitter: Arc<dyn Submitter>, fallback_email: impl Into<String>) -> Self {
        let (status, _) = watch::channel(SubmitStatus::Idle);
        Self {
            submitter,
            fallback_email: fallback_email.into(),
            in_flight: AtomicBool::new(false),
            status,
        }
    }

    /// Whether a request is currently pending.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Status of the latest attempt.
    pub fn status(&self) -> SubmitStatus {
        self.status.borrow().clone()
    }

    /// Receiver notified on every status change.
    pub fn subscribe(&self) -> watch::Receiver<SubmitStatus> {
        self.status.subscribe()
    }

    /// Send a request, falling back to a `mailto:` link on failure.
    ///
    /// Returns `AppError::SubmissionInFlight` without contacting the
    /// submitter if another request is pending.
    pub async fn dispatch(
        &self,
        request: &EnrollmentRequest,
        key: &str,
        subject: &str,
    ) -> Result<DispatchOutcome> {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            log::warn!("Submission {} rejected: another is in progress", key);
            return Err(AppError::SubmissionInFlight);
        };

        self.status.send_replace(SubmitStatus::Loading);
        let outcome = self.attempt(request, key, subject).await;
        self.status.send_replace(match &outcome {
            Ok(outcome) => SubmitStatus::from(outcome),
            Err(_) => SubmitStatus::Idle,
        });
        outcome
    }

    async fn attempt(
        &self,
        request: &EnrollmentRequest,
        key: &str,
        subject: &str,
    ) -> Result<DispatchOutcome> {
        match self.submitter.submit(request, key).await {
            Ok(receipt) => {
                log::info!("Submission {} delivered", receipt.reference);
                Ok(DispatchOutcome::Delivered(receipt))
            }
            Err(error) => {
                log::warn!("Submission {} failed: {}. Offering email fallback.", key, error);
                let mailto = mailto::compose(
                    &self.fallback_email,
                    subject,
                    &mailto::enrollment_body(request),
                )?;
                Ok(DispatchOutcome::Fallback {
                    error: error.to_string(),
                    mailto,
                })
            }
        }
    }
}
