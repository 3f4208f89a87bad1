// src/lib.rs

//! Course finder library: destination catalogs, course filtering, and
//! application intake with an email fallback.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
