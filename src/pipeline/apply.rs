// src/pipeline/apply.rs

//! Course application and contact enrollment commands.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{Catalog, Config, EnrollmentRequest};
use crate::services::dispatch::ENROLLMENT_SUBJECT;
use crate::services::{
    CourseApplication, DispatchOutcome, Dispatcher, EnrollmentForm, HttpSubmitter, PageScroll,
    SimulatedSubmitter, Submitter,
};
use crate::utils::console;

/// Applicant details entered in the apply modal.
#[derive(Debug, Clone, Default)]
pub struct Applicant {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Pick the collaborator for course applications.
pub fn application_submitter(config: &Config, simulate: bool) -> Result<Arc<dyn Submitter>> {
    if simulate || config.submission.simulate_apply {
        log::info!("Course applications are simulated; nothing is sent");
        return Ok(Arc::new(SimulatedSubmitter));
    }
    Ok(Arc::new(HttpSubmitter::new(&config.submission)?))
}

/// Apply to one course in a catalog.
pub async fn run_apply(
    config: &Config,
    catalog: Catalog,
    course_id: u32,
    applicant: &Applicant,
    submitter: Arc<dyn Submitter>,
) -> Result<DispatchOutcome> {
    let destination = catalog.destination;
    let mut app = CourseApplication::new(
        catalog,
        PageScroll::new(),
        config.form,
        submitter,
        config.submission.fallback_email.clone(),
    );

    if !app.apply(course_id) {
        return Err(AppError::CourseNotFound(course_id));
    }

    if let Some(course) = app.selected() {
        console::header(&format!("Apply for this course ({})", destination));
        console::item(&course.title);
        console::sub_item(&course.institution);
    }

    let form = app.form_mut();
    form.set_name(applicant.name.as_str());
    form.set_email(applicant.email.as_str());
    form.set_phone(applicant.phone.clone().unwrap_or_default());

    if !app.can_submit() {
        for error in app.form().errors() {
            console::failure(&error.to_string());
        }
        return Err(AppError::Validation(app.form().errors().to_vec()));
    }

    let outcome = app.submit().await?;
    report_outcome(&outcome);
    Ok(outcome)
}

/// Submit the contact-page enrollment form.
pub async fn run_enroll(
    config: &Config,
    request: EnrollmentRequest,
    submitter: Arc<dyn Submitter>,
) -> Result<DispatchOutcome> {
    let mut form = EnrollmentForm::from_values(request);
    console::header("Class Enrollment");

    let request = match form.to_request() {
        Ok(request) => request,
        Err(e) => {
            for error in e.field_errors() {
                console::failure(&error.to_string());
            }
            return Err(e);
        }
    };

    let dispatcher = Dispatcher::new(submitter, config.submission.fallback_email.clone());
    let key = request.fingerprint();
    log::info!("Submitting enrollment {} for {}", key, request.course_interest);

    let outcome = dispatcher.dispatch(&request, &key, ENROLLMENT_SUBJECT).await?;
    if outcome.is_delivered() {
        form.clear();
    }
    report_outcome(&outcome);
    Ok(outcome)
}

fn report_outcome(outcome: &DispatchOutcome) {
    match outcome {
        DispatchOutcome::Delivered(receipt) => {
            console::success(&receipt.message);
            console::sub_item(&format!("Reference: {}", receipt.reference));
        }
        DispatchOutcome::Fallback { error, mailto } => {
            console::failure(&format!("Submission failed: {}", error));
            console::item("Send your request by email instead:");
            console::sub_item(mailto);
        }
    }
}
