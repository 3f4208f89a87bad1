// src/pipeline/validate.rs

//! Configuration and catalog checks, and catalog overview.

use crate::error::Result;
use crate::models::{Catalog, Config, Destination, Unreachable};
use crate::utils::console;

/// Validate the configuration and every built-in catalog.
///
/// Courses outside their catalog's filter options are reported as warnings.
/// Returns the number of such warnings.
pub fn run_validate(config: &Config) -> Result<usize> {
    console::header("Validating configuration and catalogs");

    if let Err(e) = config.validate() {
        console::failure(&format!("Config validation failed: {}", e));
        return Err(e);
    }
    console::success("Config OK");
    console::sub_item(&format!("Endpoint: {}", config.submission.endpoint));
    console::sub_item(&format!("Timeout: {}s", config.submission.timeout_secs));
    console::sub_item(&format!("Fallback email: {}", config.submission.fallback_email));

    let mut warnings = 0;
    for destination in Destination::ALL {
        let catalog = Catalog::builtin(destination)?;
        if let Err(e) = catalog.validate() {
            console::failure(&e.to_string());
            return Err(e);
        }
        console::success(&format!("{} catalog OK ({} courses)", destination, catalog.len()));

        for (course, reason) in catalog.unreachable_courses() {
            warnings += 1;
            let detail = match reason {
                Unreachable::Level(level) => format!("level '{}' is not a filter option", level),
                Unreachable::Discipline(discipline) => {
                    format!("discipline '{}' is not a filter option", discipline)
                }
            };
            log::warn!("{} course {} ({}): {}", destination, course.id, course.title, detail);
            console::sub_item(&format!("⚠ [{}] {}: {}", course.id, course.title, detail));
        }
    }

    console::summary(
        "Validation",
        &[
            ("Catalogs", Destination::ALL.len().to_string()),
            ("Unreachable courses", warnings.to_string()),
        ],
    );
    Ok(warnings)
}

/// List destinations with their filter options.
pub fn run_info() -> Result<()> {
    for destination in Destination::ALL {
        let catalog = Catalog::builtin(destination)?;
        console::header(&format!("{} ({})", destination, destination.key()));
        console::item(&format!("Courses: {}", catalog.len()));
        console::item(&format!("Intakes: {}", catalog.intakes.join(", ")));
        console::item(&format!("Levels: {}", catalog.levels.join(", ")));
        console::item("Disciplines:");
        for discipline in &catalog.disciplines {
            console::sub_item(discipline);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_reports_known_gaps() {
        console::set_quiet(true);
        // Japan "Science & Technology" and UK "Data Science / Computing"
        assert_eq!(run_validate(&Config::default()).unwrap(), 2);
    }

    #[test]
    fn test_validate_fails_on_bad_config() {
        console::set_quiet(true);
        let mut config = Config::default();
        config.submission.timeout_secs = 0;
        assert!(run_validate(&config).is_err());
    }
}
