// src/pipeline/search.rs

//! Course search command.

use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::{Catalog, CourseRecord, Destination};
use crate::services::{FilterState, SearchResults};
use crate::utils::console;

const CARD_TEMPLATE: &str = "Tuition: {tuition} | Application fee: {application_fee} | Intakes: {intakes} | Duration: {duration} | PSW: {psw} | English: {english}";

/// Load the catalog for a destination, from a file if one is given.
pub fn load_catalog(destination: Destination, path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            log::info!("Loading {} catalog from {}", destination, path.display());
            Catalog::load(path)?
        }
        None => Catalog::builtin(destination)?,
    };

    if catalog.destination != destination {
        return Err(AppError::catalog(
            destination,
            format!("file declares destination {}", catalog.destination),
        ));
    }
    catalog.validate()?;
    Ok(catalog)
}

/// Filter a catalog and print the matching courses.
///
/// Returns the matching courses in catalog order.
pub fn run_search(catalog: &Catalog, filters: &FilterState, json: bool) -> Result<Vec<CourseRecord>> {
    let results = SearchResults::from_catalog(&catalog.courses, filters);
    log::debug!(
        "Filtered {} catalog on {:?}: {} of {} courses",
        catalog.destination,
        filters.active_axes(),
        results.len(),
        catalog.len()
    );

    let courses: Vec<CourseRecord> = results.courses().iter().map(|c| (*c).clone()).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&courses)?);
        return Ok(courses);
    }

    console::header(&format!("Discover courses in {}", catalog.destination));
    console::item(&results.summary());
    for course in results.courses() {
        console::separator();
        console::item(&course.format("[{id}] {title}"));
        console::sub_item(&course.institution);
        console::sub_item(&course.format(CARD_TEMPLATE));
        console::sub_item(&course.format("Discipline: {discipline} | Level: {level}"));
    }
    Ok(courses)
}
