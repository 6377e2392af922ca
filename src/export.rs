//! JSON export

use crate::error::Result;
use crate::pipeline::TestSuite;
use crate::testcase::TestCase;

/// Pretty-printed JSON array of test cases
pub fn to_json(cases: &[TestCase]) -> Result<String> {
    Ok(serde_json::to_string_pretty(cases)?)
}

/// Whole suite: test cases, analyses, validation outcome and statistics
pub fn suite_to_json(suite: &TestSuite) -> Result<String> {
    Ok(serde_json::to_string_pretty(suite)?)
}
