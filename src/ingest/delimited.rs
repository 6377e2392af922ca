//! CSV requirements

use super::RawRequirement;
use crate::config::DefaultsConfig;
use crate::error::Result;
use crate::requirement::{Requirement, RequirementSource};
use csv::{ReaderBuilder, StringRecord, Trim};

const ID_COLUMNS: &[&str] = &["id", "requirement id", "req_id", "req id"];
const TEXT_COLUMNS: &[&str] = &["requirement", "text", "description", "details"];
const PRIORITY_COLUMNS: &[&str] = &["priority"];
const CATEGORY_COLUMNS: &[&str] = &["category", "type"];

/// Column positions resolved from the header row
struct Columns {
    id: Option<usize>,
    text: Option<usize>,
    priority: Option<usize>,
    category: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        // First candidate name present wins
        let find = |candidates: &[&str]| {
            candidates
                .iter()
                .find_map(|c| names.iter().position(|n| n == c))
        };

        Self {
            id: find(ID_COLUMNS),
            text: find(TEXT_COLUMNS),
            priority: find(PRIORITY_COLUMNS),
            category: find(CATEGORY_COLUMNS),
        }
    }
}

pub(super) fn parse(content: &str, defaults: &DefaultsConfig) -> Result<Vec<Requirement>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns = Columns::from_headers(reader.headers()?);
    if columns.text.is_none() {
        tracing::warn!("CSV has no requirement/text/description/details column");
    }

    let mut requirements = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let field = |col: Option<usize>| {
            col.and_then(|c| record.get(c))
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let raw = RawRequirement {
            id: field(columns.id),
            text: field(columns.text),
            priority: field(columns.priority),
            category: field(columns.category),
        };

        match raw.build(index + 1, RequirementSource::CsvFile, defaults) {
            Some(req) => requirements.push(req),
            None => tracing::debug!(row = index + 1, "skipping row without requirement text"),
        }
    }

    Ok(requirements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirement::Level;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_headers_match_case_insensitively() {
        let csv = "Requirement ID,Description,Priority,Type\n\
                   R-1,Users can log in,High,Security\n\
                   R-2,Users can log out,low,\n";
        let reqs = parse(csv, &DefaultsConfig::default()).unwrap();

        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0].id, "R-1");
        assert_eq!(reqs[0].priority, Level::High);
        assert_eq!(reqs[0].category, "Security");
        assert_eq!(reqs[1].priority, Level::Low);
        assert_eq!(reqs[1].category, "Functional");
    }

    #[test]
    fn test_missing_id_and_blank_rows() {
        let csv = "text\nFirst requirement\n\"\"\nThird requirement\n";
        let reqs = parse(csv, &DefaultsConfig::default()).unwrap();

        let ids: Vec<_> = reqs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["REQ001", "REQ003"]);
        assert_eq!(reqs[1].line_number, Some(3));
        assert_eq!(reqs[1].source, RequirementSource::CsvFile);
    }

    #[test]
    fn test_quoted_text_with_commas() {
        let csv = "id,requirement\nREQ9,\"Search by name, email or phone\"\n";
        let reqs = parse(csv, &DefaultsConfig::default()).unwrap();
        assert_eq!(reqs[0].text, "Search by name, email or phone");
    }
}
