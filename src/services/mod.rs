//! Service layer for the course finder.
//!
//! This module contains the business logic for:
//! - Course filtering (`FilterState`, `filter_courses`)
//! - Apply-modal selection (`SelectionController`, `ScrollLock`)
//! - Form validation (`ApplicationForm`, `EnrollmentForm`)
//! - Submission (`Submitter`, `Dispatcher`)
//! - The per-destination apply flow (`CourseApplication`)

mod apply;
pub mod dispatch;
mod enrollment;
pub mod filter;
mod form;
pub mod selection;
pub mod submit;
pub mod validation;

pub use apply::CourseApplication;
pub use dispatch::{DispatchOutcome, Dispatcher, SubmitStatus};
pub use enrollment::EnrollmentForm;
pub use filter::{FilterState, SearchResults, filter_courses};
pub use form::ApplicationForm;
pub use selection::{CloseReason, PageScroll, ScrollLock, SelectionController};
pub use submit::{HttpSubmitter, SimulatedSubmitter, Submitter};
pub use validation::{Field, FieldError, ValidationError};
