//! Per-destination course catalogs.
//!
//! A catalog bundles the course list with the intake, level and discipline
//! enumerations that the search filters offer for that destination. The five
//! built-in catalogs are embedded at compile time from `data/catalogs/`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{CourseRecord, Destination};

/// Course catalog for one destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Destination this catalog belongs to
    pub destination: Destination,

    /// Intake options offered by the filter
    #[serde(default)]
    pub intakes: Vec<String>,

    /// Level options offered by the filter
    #[serde(default)]
    pub levels: Vec<String>,

    /// Discipline options offered by the filter
    #[serde(default)]
    pub disciplines: Vec<String>,

    /// Courses, in display order
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

/// Why a course cannot be reached through the filter options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unreachable {
    /// Level is not one of the catalog's levels
    Level(String),
    /// Discipline is not one of the catalog's disciplines
    Discipline(String),
}

impl Catalog {
    /// Load the built-in catalog for a destination.
    pub fn builtin(destination: Destination) -> Result<Self> {
        let source = match destination {
            Destination::Canada => include_str!("../../data/catalogs/canada.toml"),
            Destination::Europe => include_str!("../../data/catalogs/europe.toml"),
            Destination::Japan => include_str!("../../data/catalogs/japan.toml"),
            Destination::Uk => include_str!("../../data/catalogs/uk.toml"),
            Destination::Usa => include_str!("../../data/catalogs/usa.toml"),
        };
        let catalog = Self::from_toml_str(source)?;
        if catalog.destination != destination {
            return Err(AppError::catalog(
                destination,
                format!("built-in data declares destination {}", catalog.destination),
            ));
        }
        Ok(catalog)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Check structural integrity: at least one course and unique ids.
    ///
    /// Records outside the declared enumerations are not errors; see
    /// [`Catalog::unreachable_courses`].
    pub fn validate(&self) -> Result<()> {
        if self.courses.is_empty() {
            return Err(AppError::catalog(self.destination, "no courses defined"));
        }

        let mut seen = HashSet::new();
        for course in &self.courses {
            if !seen.insert(course.id) {
                return Err(AppError::catalog(
                    self.destination,
                    format!("duplicate course id {}", course.id),
                ));
            }
        }
        Ok(())
    }

    /// Courses whose level or discipline lies outside the filter options.
    ///
    /// Such courses still show up while the corresponding filter is unset,
    /// but can never be selected through it.
    pub fn unreachable_courses(&self) -> Vec<(&CourseRecord, Unreachable)> {
        let mut result = Vec::new();
        for course in &self.courses {
            if !self.levels.contains(&course.level) {
                result.push((course, Unreachable::Level(course.level.clone())));
            }
            if !self.disciplines.contains(&course.discipline) {
                result.push((course, Unreachable::Discipline(course.discipline.clone())));
            }
        }
        result
    }

    /// Find a course by id.
    pub fn find(&self, id: u32) -> Option<&CourseRecord> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_all_builtin_catalogs_load_and_validate() {
        for destination in Destination::ALL {
            let catalog = Catalog::builtin(destination).unwrap();
            assert_eq!(catalog.destination, destination);
            catalog.validate().unwrap();
        }
    }

    #[test]
    fn test_builtin_course_counts() {
        let counts: Vec<usize> = Destination::ALL
            .into_iter()
            .map(|d| Catalog::builtin(d).unwrap().len())
            .collect();
        assert_eq!(counts, vec![4, 6, 4, 2, 5]);
    }

    #[test]
    fn test_unreachable_japan_discipline() {
        let catalog = Catalog::builtin(Destination::Japan).unwrap();
        let unreachable = catalog.unreachable_courses();
        assert_eq!(unreachable.len(), 1);
        assert_eq!(unreachable[0].0.id, 1);
        assert_eq!(
            unreachable[0].1,
            Unreachable::Discipline("Science & Technology".to_string())
        );
    }

    #[test]
    fn test_canada_fully_reachable() {
        let catalog = Catalog::builtin(Destination::Canada).unwrap();
        assert!(catalog.unreachable_courses().is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut catalog = Catalog::builtin(Destination::Canada).unwrap();
        let dup = catalog.courses[0].clone();
        catalog.courses.push(dup);
        assert!(matches!(
            catalog.validate(),
            Err(AppError::Catalog { .. })
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let catalog = Catalog::from_toml_str("destination = \"uk\"").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
destination = "europe"
intakes = ["September"]
levels = ["Postgraduate"]
disciplines = ["Health"]

[[courses]]
id = 10
title = "MSc Global Health"
institution = "Maastricht University"
tuitionFee = "€17,000"
applicationFee = "€0"
duration = "12 months"
intakes = "September"
postStudyWork = false
englishScore = "6.5"
discipline = "Health"
level = "Postgraduate"
"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.destination, Destination::Europe);
        assert_eq!(catalog.find(10).unwrap().institution, "Maastricht University");
        assert!(catalog.find(11).is_none());
    }
}
