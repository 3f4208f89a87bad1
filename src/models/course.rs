//! Course record data structure.

use serde::{Deserialize, Serialize};

/// One study program offering in a destination catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Identifier, unique within its catalog
    pub id: u32,

    /// Program display name
    pub title: String,

    /// Offering university or institute
    pub institution: String,

    /// Path to the institution logo (opaque)
    #[serde(default)]
    pub logo_ref: String,

    /// Display string, not parsed
    pub tuition_fee: String,

    /// Display string, not parsed
    pub application_fee: String,

    /// e.g. "36 months"
    pub duration: String,

    /// Free-form intake list, e.g. "September, January"
    pub intakes: String,

    /// Post-study work rights
    #[serde(default)]
    pub post_study_work: bool,

    /// Required English test score description
    pub english_score: String,

    /// Subject area tag
    pub discipline: String,

    /// Study level, e.g. "Undergraduate"
    pub level: String,
}

impl CourseRecord {
    /// Format the course for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{title}`, `{institution}`, `{tuition}`, `{application_fee}`
    /// - `{duration}`, `{intakes}`, `{psw}`, `{english}`, `{discipline}`, `{level}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id.to_string())
            .replace("{title}", &self.title)
            .replace("{institution}", &self.institution)
            .replace("{tuition}", &self.tuition_fee)
            .replace("{application_fee}", &self.application_fee)
            .replace("{duration}", &self.duration)
            .replace("{intakes}", &self.intakes)
            .replace("{psw}", if self.post_study_work { "Yes" } else { "No" })
            .replace("{english}", &self.english_score)
            .replace("{discipline}", &self.discipline)
            .replace("{level}", &self.level)
    }
}
