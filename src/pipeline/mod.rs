//! Pipeline entry points for the CLI commands.
//!
//! - `run_search`: Filter a destination catalog and print the matches
//! - `run_apply`: Apply to one course through the apply flow
//! - `run_enroll`: Submit the contact-page enrollment form
//! - `run_validate`: Check configuration and catalogs
//! - `run_info`: List destinations and their filter options

pub mod apply;
pub mod search;
pub mod validate;

pub use apply::{Applicant, application_submitter, run_apply, run_enroll};
pub use search::{load_catalog, run_search};
pub use validate::{run_info, run_validate};
