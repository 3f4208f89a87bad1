// src/utils/mailto.rs

//! `mailto:` links for the degraded email submission path.

use url::Url;

use crate::error::Result;
use crate::models::EnrollmentRequest;

/// Build a `mailto:` link with a pre-filled subject and body.
pub fn compose(to: &str, subject: &str, body: &str) -> Result<String> {
    let mut url = Url::parse(&format!("mailto:{to}"))?;
    url.query_pairs_mut()
        .append_pair("subject", subject)
        .append_pair("body", body);

    // Form encoding writes spaces as '+', which mail clients show literally.
    // Literal '+' is already escaped as %2B at this point.
    let query = url.query().unwrap_or_default().replace('+', "%20");
    url.set_query(Some(&query));
    Ok(url.to_string())
}

/// Email body listing the enrollment fields.
pub fn enrollment_body(request: &EnrollmentRequest) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\nCourse: {}\nMessage: {}",
        request.full_name, request.email, request.phone, request.course_interest, request.message
    )
}
