//! Requirement ingestion: load requirements from CSV, JSON and text files
//!
//! Dispatches on the file extension. Every loader applies the configured
//! defaults for priority and category when the input leaves them out.

mod delimited;
mod json;
mod text;

use crate::config::DefaultsConfig;
use crate::error::{Error, Result};
use crate::requirement::{Level, Requirement, RequirementSource};
use std::path::Path;

/// Input formats reqgen can read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
    Text,
}

impl InputFormat {
    /// Detect from a path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            "txt" | "md" => Ok(InputFormat::Text),
            "" => Err(Error::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
            other => Err(Error::UnsupportedFormat(format!(".{}", other))),
        }
    }

    pub fn source(self) -> RequirementSource {
        match self {
            InputFormat::Csv => RequirementSource::CsvFile,
            InputFormat::Json => RequirementSource::JsonFile,
            InputFormat::Text => RequirementSource::TextFile,
        }
    }
}

/// Load requirements from a file
pub fn load_file(path: &Path, defaults: &DefaultsConfig) -> Result<Vec<Requirement>> {
    let format = InputFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| Error::Ingest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let requirements = parse_str(&content, format, defaults).map_err(|e| match e {
        Error::Ingest { .. } => e,
        other => Error::Ingest {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })?;

    tracing::info!(
        path = %path.display(),
        requirements = requirements.len(),
        "loaded requirements"
    );
    Ok(requirements)
}

/// Parse requirements from in-memory content
pub fn parse_str(
    content: &str,
    format: InputFormat,
    defaults: &DefaultsConfig,
) -> Result<Vec<Requirement>> {
    match format {
        InputFormat::Csv => delimited::parse(content, defaults),
        InputFormat::Json => json::parse(content, defaults),
        InputFormat::Text => Ok(text::parse(content, defaults)),
    }
}

/// Raw fields pulled out of a record before validation
#[derive(Debug, Default)]
struct RawRequirement {
    id: Option<String>,
    text: Option<String>,
    priority: Option<String>,
    category: Option<String>,
}

impl RawRequirement {
    /// Build a requirement, or `None` when there is no text.
    /// `position` is 1-based and used for both the fallback id and the line.
    fn build(
        self,
        position: usize,
        source: RequirementSource,
        defaults: &DefaultsConfig,
    ) -> Option<Requirement> {
        let text = self.text.filter(|t| !t.trim().is_empty())?;
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| crate::requirement::auto_id(position));

        let requirement = Requirement::new(id, text).ok()?;
        Some(
            requirement
                .with_priority(resolve_priority(self.priority.as_deref(), defaults))
                .with_category(self.category.unwrap_or_else(|| defaults.category.clone()))
                .with_source(source)
                .with_line_number(position),
        )
    }
}

/// Parse a priority label, falling back to the configured default
fn resolve_priority(raw: Option<&str>, defaults: &DefaultsConfig) -> Level {
    match raw.map(str::trim).filter(|p| !p.is_empty()) {
        None => defaults.priority,
        Some(label) => label.parse().unwrap_or_else(|_| {
            tracing::warn!(
                priority = label,
                fallback = %defaults.priority,
                "unknown priority, using default"
            );
            defaults.priority
        }),
    }
}
