//! End-to-end tests for the search-and-apply flow.
//! A local TCP listener stands in for the enrollment endpoint.

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use coursefinder::error::AppError;
use coursefinder::models::{Catalog, Destination, EnrollmentRequest, FormConfig, SubmissionConfig};
use coursefinder::services::{
    CourseApplication, DispatchOutcome, Field, FilterState, HttpSubmitter, PageScroll,
    ValidationError, filter_courses,
};

/// Serve one HTTP request with the given status; yields the raw request.
async fn serve_once(status: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/api/enroll", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if request_complete(&raw) {
                break;
            }
        }
        let response = format!("HTTP/1.1 {status}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&raw).into_owned()
    });

    (endpoint, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn application(endpoint: &str, page: &PageScroll) -> CourseApplication {
    let config = SubmissionConfig {
        endpoint: endpoint.to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    CourseApplication::new(
        Catalog::builtin(Destination::Canada).unwrap(),
        page.clone(),
        FormConfig::default(),
        Arc::new(HttpSubmitter::new(&config).unwrap()),
        config.fallback_email.clone(),
    )
}

fn ids(catalog: &Catalog, filters: &FilterState) -> Vec<u32> {
    filter_courses(&catalog.courses, filters)
        .iter()
        .map(|c| c.id)
        .collect()
}

#[test]
fn canada_filter_scenarios() {
    let catalog = Catalog::builtin(Destination::Canada).unwrap();

    assert_eq!(ids(&catalog, &FilterState::new().with_search("toronto")), vec![1, 4]);
    assert_eq!(
        ids(&catalog, &FilterState::new().with_level("Undergraduate")),
        vec![2, 3]
    );
    assert_eq!(ids(&catalog, &FilterState::new().with_intake("January")), vec![1, 3]);
}

#[test]
fn empty_name_and_bad_email_block_submit() {
    let page = PageScroll::new();
    let mut app = application("http://127.0.0.1:9/api/enroll", &page);
    app.apply(2);
    app.form_mut().set_name("");
    app.form_mut().set_email("bad");

    let errors: Vec<(Field, ValidationError)> =
        app.form().errors().iter().map(|e| (e.field, e.error)).collect();
    assert_eq!(
        errors,
        vec![
            (Field::Name, ValidationError::Required),
            (Field::Email, ValidationError::InvalidFormat),
        ]
    );
    assert!(!app.can_submit());
}

#[test]
fn open_then_cancel_releases_scroll_lock() {
    let page = PageScroll::new();
    let mut app = application("http://127.0.0.1:9/api/enroll", &page);

    assert!(app.apply(2));
    assert_eq!(app.selected().map(|c| c.id), Some(2));
    assert!(page.is_locked());

    app.cancel();
    assert!(app.selected().is_none());
    assert!(!app.is_open());
    assert!(!page.is_locked());
}

#[tokio::test]
async fn delivered_application_posts_json_and_closes() {
    let (endpoint, server) = serve_once("200 OK").await;
    let page = PageScroll::new();
    let mut app = application(&endpoint, &page);

    app.apply(4);
    app.form_mut().set_name("Asha Gurung");
    app.form_mut().set_email("asha@example.com");
    app.form_mut().set_phone("+977 9800000000");

    let outcome = app.submit().await.unwrap();
    assert!(outcome.is_delivered());
    assert!(!app.is_open());
    assert!(!page.is_locked());
    assert_eq!(app.form().email(), "");

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /api/enroll HTTP/1.1"));
    assert!(raw.to_ascii_lowercase().contains("idempotency-key: "));

    let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
    let sent: EnrollmentRequest = serde_json::from_str(body).unwrap();
    assert_eq!(sent.full_name, "Asha Gurung");
    assert_eq!(sent.course_interest, "Master of Public Health");
    assert!(sent.consent);
}

#[tokio::test]
async fn server_error_falls_back_to_email_and_keeps_form() {
    let (endpoint, server) = serve_once("500 Internal Server Error").await;
    let page = PageScroll::new();
    let mut app = application(&endpoint, &page);

    app.apply(1);
    app.form_mut().set_name("Asha Gurung");
    app.form_mut().set_email("asha@example.com");

    let outcome = app.submit().await.unwrap();
    server.await.unwrap();

    match outcome {
        DispatchOutcome::Fallback { error, mailto } => {
            assert!(error.contains("500"));
            assert!(mailto.starts_with("mailto:info@educationtreeglobal.com?"));
            assert!(mailto.contains("Email%3A%20asha%40example.com"));
        }
        other => panic!("expected fallback, got {other:?}"),
    }
    assert!(app.is_open());
    assert!(page.is_locked());
    assert!(app.can_submit());
}

#[tokio::test]
async fn submit_without_selection_is_rejected() {
    let page = PageScroll::new();
    let mut app = application("http://127.0.0.1:9/api/enroll", &page);
    app.form_mut().set_name("Asha Gurung");
    app.form_mut().set_email("asha@example.com");

    let err = app.submit().await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.field_errors()[0].field, Field::Course);
}
