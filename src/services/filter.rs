// src/services/filter.rs

//! Course filter engine.
//!
//! A course passes when every active axis matches:
//!
//! - level: exact, case-sensitive equality
//! - disciplines: membership in the selected set (OR within the set)
//! - intake: substring of the course's free-form intake list
//! - search: case-insensitive substring of title or institution
//!
//! Unset axes (empty string / empty set) match everything. Output keeps
//! catalog order and borrows from the catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::CourseRecord;

/// Ephemeral filter selections for one search view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub intake: String,
    pub level: String,
    pub selected_disciplines: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_intake(mut self, intake: impl Into<String>) -> Self {
        self.intake = intake.into();
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Add a discipline to the selection (no toggle).
    pub fn with_discipline(mut self, discipline: impl Into<String>) -> Self {
        self.selected_disciplines.insert(discipline.into());
        self
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_intake(&mut self, intake: impl Into<String>) {
        self.intake = intake.into();
    }

    pub fn set_level(&mut self, level: impl Into<String>) {
        self.level = level.into();
    }

    /// Select the discipline if unselected, otherwise unselect it.
    pub fn toggle_discipline(&mut self, discipline: &str) {
        if !self.selected_disciplines.remove(discipline) {
            self.selected_disciplines.insert(discipline.to_string());
        }
    }

    /// Clear every axis back to "all".
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no axis is active.
    pub fn is_empty(&self) -> bool {
        self.active_axes().is_empty()
    }

    /// Names of the active axes, for reporting.
    pub fn active_axes(&self) -> Vec<&'static str> {
        let mut axes = Vec::new();
        if !self.search_text.is_empty() {
            axes.push("search");
        }
        if !self.intake.is_empty() {
            axes.push("intake");
        }
        if !self.level.is_empty() {
            axes.push("level");
        }
        if !self.selected_disciplines.is_empty() {
            axes.push("discipline");
        }
        axes
    }

    /// Whether a single course passes every active axis.
    pub fn matches(&self, course: &CourseRecord) -> bool {
        self.matches_level(course)
            && self.matches_discipline(course)
            && self.matches_intake(course)
            && self.matches_search(course)
    }

    fn matches_level(&self, course: &CourseRecord) -> bool {
        self.level.is_empty() || course.level == self.level
    }

    fn matches_discipline(&self, course: &CourseRecord) -> bool {
        self.selected_disciplines.is_empty()
            || self.selected_disciplines.contains(&course.discipline)
    }

    fn matches_intake(&self, course: &CourseRecord) -> bool {
        self.intake.is_empty() || course.intakes.contains(&self.intake)
    }

    fn matches_search(&self, course: &CourseRecord) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let query = self.search_text.to_lowercase();
        course.title.to_lowercase().contains(&query)
            || course.institution.to_lowercase().contains(&query)
    }
}

/// Filter a catalog, preserving catalog order.
pub fn filter_courses<'a>(catalog: &'a [CourseRecord], filters: &FilterState) -> Vec<&'a CourseRecord> {
    catalog.iter().filter(|c| filters.matches(c)).collect()
}

/// Filtered courses for display.
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    courses: Vec<&'a CourseRecord>,
}

impl<'a> SearchResults<'a> {
    /// Run the filter over a catalog.
    pub fn from_catalog(catalog: &'a [CourseRecord], filters: &FilterState) -> Self {
        Self {
            courses: filter_courses(catalog, filters),
        }
    }

    pub fn courses(&self) -> &[&'a CourseRecord] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// The explicit "no results" state.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.courses.iter().map(|c| c.id).collect()
    }

    /// Result line shown above the list.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            "No courses found matching your criteria.".to_string()
        } else {
            format!("Showing {} result(s)", self.len())
        }
    }
}
