//! Requirement types: the input data model
//!
//! A `Requirement` is one natural-language statement plus the metadata
//! needed to trace generated test cases back to it.
//!
//! ```rust
//! use reqgen::{Level, Requirement};
//!
//! let req = Requirement::new("REQ001", "Users can reset their password via email")?
//!     .with_priority(Level::High)
//!     .with_category("Authentication");
//! assert_eq!(req.priority, Level::High);
//! # Ok::<(), reqgen::Error>(())
//! ```

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-step scale shared by priority, complexity and risk
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    JsonSchema,
)]
pub enum Level {
    High,
    #[default]
    Medium,
    Low,
}

impl Level {
    /// Sort rank used when prioritising test cases (High first)
    pub fn rank(self) -> u8 {
        match self {
            Level::High => 1,
            Level::Medium => 2,
            Level::Low => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::High => "High",
            Level::Medium => "Medium",
            Level::Low => "Low",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" | "h" | "critical" => Ok(Level::High),
            "medium" | "med" | "m" | "normal" => Ok(Level::Medium),
            "low" | "l" => Ok(Level::Low),
            other => Err(Error::Other(format!("Unknown level: {}", other))),
        }
    }
}

/// Where a requirement came from. Provenance only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequirementSource {
    #[default]
    Manual,
    CsvFile,
    ExcelFile,
    JsonFile,
    TextFile,
    WordFile,
}

impl RequirementSource {
    pub fn as_str(self) -> &'static str {
        match self {
            RequirementSource::Manual => "manual",
            RequirementSource::CsvFile => "csv_file",
            RequirementSource::ExcelFile => "excel_file",
            RequirementSource::JsonFile => "json_file",
            RequirementSource::TextFile => "text_file",
            RequirementSource::WordFile => "word_file",
        }
    }
}

/// A single requirement statement.
///
/// Deserialization goes through [`Requirement::new`], so a blank id or text
/// is rejected there too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RequirementRecord")]
#[schemars(title = "Requirement", description = "A requirement statement to derive tests from")]
pub struct Requirement {
    /// Identifier, unique within a batch
    pub id: String,

    /// Natural-language requirement statement
    pub text: String,

    /// Business priority
    #[serde(default)]
    pub priority: Level,

    /// Free-form category label
    #[serde(default = "default_category")]
    pub category: String,

    /// Origin of the requirement
    #[serde(default)]
    pub source: RequirementSource,

    /// Line or row in the origin file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

pub(crate) fn default_category() -> String {
    "Functional".to_string()
}

/// Unchecked wire shape of a [`Requirement`]
#[derive(Deserialize, JsonSchema)]
struct RequirementRecord {
    id: String,
    text: String,
    #[serde(default)]
    priority: Level,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default)]
    source: RequirementSource,
    #[serde(default)]
    line_number: Option<usize>,
}

impl TryFrom<RequirementRecord> for Requirement {
    type Error = Error;

    fn try_from(record: RequirementRecord) -> Result<Self> {
        let mut req = Requirement::new(record.id, record.text)?
            .with_priority(record.priority)
            .with_category(record.category)
            .with_source(record.source);
        req.line_number = record.line_number;
        Ok(req)
    }
}

impl Requirement {
    /// Create a requirement with default metadata.
    ///
    /// Both `id` and `text` are trimmed and must be non-empty.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let id = id.into().trim().to_string();
        let text = text.into().trim().to_string();

        if id.is_empty() {
            return Err(Error::InvalidRequirement(
                "requirement id must not be empty".into(),
            ));
        }
        if text.is_empty() {
            return Err(Error::InvalidRequirement(format!(
                "requirement {} has no text",
                id
            )));
        }

        Ok(Self {
            id,
            text,
            priority: Level::default(),
            category: default_category(),
            source: RequirementSource::default(),
            line_number: None,
        })
    }

    pub fn with_priority(mut self, priority: Level) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !category.trim().is_empty() {
            self.category = category.trim().to_string();
        }
        self
    }

    pub fn with_source(mut self, source: RequirementSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_line_number(mut self, line: usize) -> Self {
        self.line_number = Some(line);
        self
    }

    /// Re-check the construction invariant, e.g. after deserialization
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidRequirement(
                "requirement id must not be empty".into(),
            ));
        }
        if self.text.trim().is_empty() {
            return Err(Error::InvalidRequirement(format!(
                "requirement {} has no text",
                self.id
            )));
        }
        Ok(())
    }
}

/// Auto-generated requirement id (`REQ001`, `REQ002`, ...)
pub fn auto_id(n: usize) -> String {
    format!("REQ{:03}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_defaults() {
        let req = Requirement::new(" REQ001 ", "  The system shall log events  ").unwrap();
        assert_eq!(req.id, "REQ001");
        assert_eq!(req.text, "The system shall log events");
        assert_eq!(req.priority, Level::Medium);
        assert_eq!(req.category, "Functional");
        assert_eq!(req.source, RequirementSource::Manual);
        assert_eq!(req.line_number, None);
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let err = Requirement::new("REQ001", "   ").unwrap_err();
        assert!(matches!(err, Error::InvalidRequirement(_)));
    }

    #[test]
    fn test_deserialize_rejects_blank_fields() {
        let err = serde_json::from_str::<Requirement>(r#"{"id":"","text":"   "}"#).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));

        let err = serde_json::from_str::<Requirement>(r#"{"id":"R1","text":" "}"#).unwrap_err();
        assert!(err.to_string().contains("R1 has no text"));
    }

    #[test]
    fn test_deserialize_trims_and_defaults() {
        let req: Requirement =
            serde_json::from_str(r#"{"id":" R7 ","text":" Export orders ","line_number":4}"#)
                .unwrap();
        assert_eq!(req.id, "R7");
        assert_eq!(req.text, "Export orders");
        assert_eq!(req.category, "Functional");
        assert_eq!(req.line_number, Some(4));
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let err = Requirement::new("", "Some text").unwrap_err();
        assert!(matches!(err, Error::InvalidRequirement(_)));
    }

    #[test]
    fn test_blank_category_keeps_default() {
        let req = Requirement::new("R1", "text").unwrap().with_category("  ");
        assert_eq!(req.category, "Functional");
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("HIGH".parse::<Level>().unwrap(), Level::High);
        assert_eq!(" medium ".parse::<Level>().unwrap(), Level::Medium);
        assert_eq!("low".parse::<Level>().unwrap(), Level::Low);
        assert!("urgent-ish".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_rank_orders_high_first() {
        assert!(Level::High.rank() < Level::Medium.rank());
        assert!(Level::Medium.rank() < Level::Low.rank());
    }

    #[test]
    fn test_source_serializes_snake_case() {
        let json = serde_json::to_string(&RequirementSource::CsvFile).unwrap();
        assert_eq!(json, "\"csv_file\"");
        assert_eq!(RequirementSource::WordFile.as_str(), "word_file");
    }

    #[test]
    fn test_auto_id() {
        assert_eq!(auto_id(1), "REQ001");
        assert_eq!(auto_id(42), "REQ042");
        assert_eq!(auto_id(1234), "REQ1234");
    }
}
