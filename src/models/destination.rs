//! Study destinations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A study-abroad destination with its own course catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Canada,
    Europe,
    Japan,
    Uk,
    Usa,
}

impl Destination {
    /// All destinations that ship with a built-in catalog.
    pub const ALL: [Destination; 5] = [
        Destination::Canada,
        Destination::Europe,
        Destination::Japan,
        Destination::Uk,
        Destination::Usa,
    ];

    /// Lowercase key used in file names and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Destination::Canada => "canada",
            Destination::Europe => "europe",
            Destination::Japan => "japan",
            Destination::Uk => "uk",
            Destination::Usa => "usa",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Destination::Canada => "Canada",
            Destination::Europe => "Europe",
            Destination::Japan => "Japan",
            Destination::Uk => "UK",
            Destination::Usa => "USA",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Destination {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Destination::ALL
            .into_iter()
            .find(|d| d.key() == key)
            .ok_or_else(|| {
                AppError::config(format!(
                    "Unknown destination '{s}' (expected one of: canada, europe, japan, uk, usa)"
                ))
            })
    }
}
