// src/models/mod.rs

//! Domain models for the course finder.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod catalog;
mod config;
mod course;
mod destination;
mod submission;

// Re-export all public types
pub use catalog::{Catalog, Unreachable};
pub use config::{Config, FormConfig, LoggingConfig, SubmissionConfig};
pub use course::CourseRecord;
pub use destination::Destination;
pub use submission::{
    ApplicationSubmission, COURSE_INTERESTS, CURRENT_LEVELS, EnrollmentRequest,
    PREFERRED_BATCHES, SubmissionReceipt,
};

#[cfg(test)]
pub(crate) use course::tests::sample_course;
