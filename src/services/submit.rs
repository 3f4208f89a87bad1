// src/services/submit.rs

//! Submission collaborators.
//!
//! - `HttpSubmitter`: POSTs the enrollment payload as JSON
//! - `SimulatedSubmitter`: confirms locally without a network call

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{EnrollmentRequest, SubmissionConfig, SubmissionReceipt};
use crate::utils::http;

/// Header carrying the submission fingerprint.
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Something that can deliver an enrollment request.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver the request. Any error is terminal for this attempt.
    async fn submit(&self, request: &EnrollmentRequest, key: &str) -> Result<SubmissionReceipt>;
}

/// Submits to the enrollment endpoint over HTTP.
pub struct HttpSubmitter {
    client: Client,
    endpoint: Url,
}

impl HttpSubmitter {
    pub fn new(config: &SubmissionConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_client(config)?,
            endpoint: Url::parse(&config.endpoint)?,
        })
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, request: &EnrollmentRequest, key: &str) -> Result<SubmissionReceipt> {
        log::debug!("POST {} ({})", self.endpoint, key);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(IDEMPOTENCY_HEADER, key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match body.trim() {
                "" => status.canonical_reason().unwrap_or("Server error").to_string(),
                text => text.to_string(),
            };
            return Err(AppError::submission(status.as_u16(), message));
        }

        Ok(SubmissionReceipt::new(
            key,
            "Enrollment request submitted! We will contact you within 24 hours.",
        ))
    }
}

/// Confirms applications without contacting the endpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedSubmitter;

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, request: &EnrollmentRequest, key: &str) -> Result<SubmissionReceipt> {
        let message = format!("Application for {} sent!", request.course_interest);
        log::info!(
            "{} Name: {}, Email: {}, Phone: {}",
            message,
            request.full_name,
            request.email,
            request.phone
        );
        Ok(SubmissionReceipt::new(key, message))
    }
}
