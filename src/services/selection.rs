// src/services/selection.rs

//! Course selection and apply-modal state.
//!
//! The controller is either `Closed` or `Open` with exactly one course. While
//! open it holds a [`ScrollLock`] on the page; the lock lives inside the open
//! state, so leaving that state by any path releases it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::CourseRecord;

/// Scroll state of the page behind the modal.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    locks: Arc<AtomicUsize>,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend page scrolling until the returned guard is dropped.
    pub fn lock(&self) -> ScrollLock {
        self.locks.fetch_add(1, Ordering::SeqCst);
        ScrollLock {
            locks: Arc::clone(&self.locks),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locks.load(Ordering::SeqCst) > 0
    }
}

/// Guard returned by [`PageScroll::lock`].
#[derive(Debug)]
pub struct ScrollLock {
    locks: Arc<AtomicUsize>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.locks.fetch_sub(1, Ordering::SeqCst);
    }
}

/// How the modal was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Cancel button
    Cancel,
    /// Backdrop click or close icon
    Dismiss,
    /// Application delivered
    Submitted,
}

#[derive(Debug, Default)]
enum ModalState {
    #[default]
    Closed,
    Open {
        course: CourseRecord,
        _lock: ScrollLock,
    },
}

/// Tracks which course, if any, is being applied to.
#[derive(Debug)]
pub struct SelectionController {
    page: PageScroll,
    state: ModalState,
}

impl SelectionController {
    pub fn new(page: PageScroll) -> Self {
        Self {
            page,
            state: ModalState::Closed,
        }
    }

    /// Open the modal for a course.
    ///
    /// `None` is a no-op so the modal never shows without a course. Opening
    /// while already open replaces the selection. Returns whether the modal
    /// is open afterwards for the given course.
    pub fn open(&mut self, course: Option<&CourseRecord>) -> bool {
        let Some(course) = course else {
            log::debug!("Ignoring open request without a course");
            return false;
        };

        // Release any previous lock before taking the new one.
        self.state = ModalState::Closed;
        self.state = ModalState::Open {
            course: course.clone(),
            _lock: self.page.lock(),
        };
        log::debug!("Apply modal opened for course {}", course.id);
        true
    }

    /// Close the modal, clearing the selection. No-op when already closed.
    pub fn close(&mut self, reason: CloseReason) {
        if let ModalState::Open { course, .. } = std::mem::take(&mut self.state) {
            log::debug!("Apply modal closed for course {} ({:?})", course.id, reason);
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    pub fn selected(&self) -> Option<&CourseRecord> {
        match &self.state {
            ModalState::Open { course, .. } => Some(course),
            ModalState::Closed => None,
        }
    }
}
