// src/services/apply.rs

//! Course search-and-apply flow for one destination.
//!
//! Ties the filter state, the selection controller and the application form
//! to a dispatcher. Each instance owns its own state. `submit` borrows the
//! application mutably for the whole request; a UI watches progress through
//! the shared `dispatcher()` handle, where the single-flight rule lives.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Catalog, CourseRecord, EnrollmentRequest, FormConfig};
use crate::services::dispatch::{APPLICATION_SUBJECT, DispatchOutcome, Dispatcher, SubmitStatus};
use crate::services::filter::{FilterState, SearchResults};
use crate::services::form::ApplicationForm;
use crate::services::selection::{CloseReason, PageScroll, SelectionController};
use crate::services::submit::Submitter;

/// Search-and-apply state for one destination catalog.
pub struct CourseApplication {
    catalog: Catalog,
    filters: FilterState,
    selection: SelectionController,
    form: ApplicationForm,
    dispatcher: Arc<Dispatcher>,
}

impl CourseApplication {
    pub fn new(
        catalog: Catalog,
        page: PageScroll,
        limits: FormConfig,
        submitter: Arc<dyn Submitter>,
        fallback_email: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            filters: FilterState::default(),
            selection: SelectionController::new(page),
            form: ApplicationForm::new(limits),
            dispatcher: Arc::new(Dispatcher::new(submitter, fallback_email)),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Courses matching the current filters.
    pub fn results(&self) -> SearchResults<'_> {
        SearchResults::from_catalog(&self.catalog.courses, &self.filters)
    }

    /// Open the apply modal for a course. Unknown ids are ignored.
    pub fn apply(&mut self, course_id: u32) -> bool {
        let course = self.catalog.find(course_id);
        if course.is_none() {
            log::warn!(
                "Course {} not in {} catalog; ignoring apply",
                course_id,
                self.catalog.destination
            );
        }
        self.selection.open(course)
    }

    /// Cancel button.
    pub fn cancel(&mut self) {
        self.selection.close(CloseReason::Cancel);
    }

    /// Backdrop click or close icon.
    pub fn dismiss(&mut self) {
        self.selection.close(CloseReason::Dismiss);
    }

    pub fn selected(&self) -> Option<&CourseRecord> {
        self.selection.selected()
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_open()
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ApplicationForm {
        &mut self.form
    }

    pub fn status(&self) -> SubmitStatus {
        self.dispatcher.status()
    }

    /// Shared handle for observing the pending state from outside `submit`.
    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.selection.is_open() && self.form.is_valid() && !self.dispatcher.is_busy()
    }

    /// Submit the form for the selected course.
    ///
    /// On delivery the form is cleared and the modal closed. On fallback both
    /// are kept so the user can retry or send the prepared email.
    pub async fn submit(&mut self) -> Result<DispatchOutcome> {
        let submission = self.form.to_submission(self.selection.selected())?;

        let key = submission.fingerprint();
        let request = EnrollmentRequest::from(&submission);
        log::info!(
            "Submitting application {} for course {} ({})",
            key,
            submission.course_id,
            self.catalog.destination
        );

        let outcome = self
            .dispatcher
            .dispatch(&request, &key, APPLICATION_SUBJECT)
            .await?;

        if outcome.is_delivered() {
            self.form.clear();
            self.selection.close(CloseReason::Submitted);
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use tokio::sync::Notify;

    use super::*;
    use crate::error::AppError;
    use crate::models::{Destination, SubmissionReceipt};
    use crate::services::submit::SimulatedSubmitter;

    struct Unreachable;

    #[async_trait]
    impl Submitter for Unreachable {
        async fn submit(&self, _: &EnrollmentRequest, _: &str) -> Result<SubmissionReceipt> {
            Err(AppError::submission(503, "Service Unavailable"))
        }
    }

    /// Holds the request open until released.
    #[derive(Default)]
    struct Held {
        started: Notify,
        release: Notify,
    }

    #[async_trait]
    impl Submitter for Held {
        async fn submit(&self, _: &EnrollmentRequest, key: &str) -> Result<SubmissionReceipt> {
            self.started.notify_one();
            self.release.notified().await;
            Ok(SubmissionReceipt::new(key, "sent"))
        }
    }

    fn canada(submitter: Arc<dyn Submitter>, page: &PageScroll) -> CourseApplication {
        CourseApplication::new(
            Catalog::builtin(Destination::Canada).unwrap(),
            page.clone(),
            FormConfig::default(),
            submitter,
            "info@educationtreeglobal.com",
        )
    }

    fn fill(app: &mut CourseApplication) {
        app.form_mut().set_name("Asha Gurung");
        app.form_mut().set_email("asha@example.com");
    }

    #[test]
    fn test_results_follow_filters() {
        let page = PageScroll::new();
        let mut app = canada(Arc::new(SimulatedSubmitter), &page);
        assert_eq!(app.results().ids(), vec![1, 2, 3, 4]);

        app.filters_mut().set_search("toronto");
        assert_eq!(app.results().ids(), vec![1, 4]);

        app.filters_mut().reset();
        assert_eq!(app.results().len(), 4);
    }

    #[test]
    fn test_apply_unknown_course_is_noop() {
        let page = PageScroll::new();
        let mut app = canada(Arc::new(SimulatedSubmitter), &page);
        assert!(!app.apply(99));
        assert!(!app.is_open());
        assert!(!page.is_locked());
    }

    #[test]
    fn test_cancel_releases_lock() {
        let page = PageScroll::new();
        let mut app = canada(Arc::new(SimulatedSubmitter), &page);
        assert!(app.apply(2));
        assert!(page.is_locked());
        app.cancel();
        assert!(app.selected().is_none());
        assert!(!page.is_locked());
    }

    #[test]
    fn test_submit_disabled_until_valid_and_open() {
        let page = PageScroll::new();
        let mut app = canada(Arc::new(SimulatedSubmitter), &page);
        fill(&mut app);
        assert!(!app.can_submit());

        app.apply(3);
        assert!(app.can_submit());

        app.form_mut().set_email("bad");
        assert!(!app.can_submit());
    }

    #[tokio::test]
    async fn test_invalid_submit_is_blocked() {
        let page = PageScroll::new();
        let mut app = canada(Arc::new(SimulatedSubmitter), &page);
        app.apply(1);
        app.form_mut().set_email("bad");

        let err = app.submit().await.unwrap_err();
        assert_eq!(err.field_errors().len(), 2);
        assert!(app.is_open());
        assert_eq!(app.status(), SubmitStatus::Idle);
    }

    #[tokio::test]
    async fn test_delivered_submit_clears_and_closes() {
        let page = PageScroll::new();
        let mut app = canada(Arc::new(SimulatedSubmitter), &page);
        app.apply(2);
        fill(&mut app);

        let outcome = app.submit().await.unwrap();
        assert!(outcome.is_delivered());
        assert!(!app.is_open());
        assert!(!page.is_locked());
        assert_eq!(app.form().name(), "");
        assert_eq!(
            app.status(),
            SubmitStatus::Succeeded("Application for Bachelor of Computer Science sent!".into())
        );
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_modal_and_offers_email() {
        let page = PageScroll::new();
        let mut app = canada(Arc::new(Unreachable), &page);
        app.apply(4);
        fill(&mut app);

        let outcome = app.submit().await.unwrap();
        let DispatchOutcome::Fallback { mailto, .. } = outcome else {
            panic!("expected fallback");
        };
        assert!(mailto.contains("Course%20Application%20Request"));
        assert!(mailto.contains("Master%20of%20Public%20Health"));
        assert!(app.is_open());
        assert!(page.is_locked());
        assert_eq!(app.form().name(), "Asha Gurung");
        assert!(app.can_submit());
    }

    #[tokio::test]
    async fn test_pending_submit_visible_through_dispatcher() {
        let held = Arc::new(Held::default());
        let page = PageScroll::new();
        let mut app = canada(held.clone(), &page);
        app.apply(3);
        fill(&mut app);

        let dispatcher = app.dispatcher();
        let watcher = async {
            held.started.notified().await;
            let busy = dispatcher.is_busy();
            let status = dispatcher.status();
            held.release.notify_one();
            (busy, status)
        };

        let (outcome, (busy, status)) = tokio::join!(app.submit(), watcher);
        assert!(busy);
        assert_eq!(status, SubmitStatus::Loading);
        assert!(outcome.unwrap().is_delivered());
        assert!(!dispatcher.is_busy());
        assert_eq!(app.status(), SubmitStatus::Succeeded("sent".into()));
    }
}
