//! JSON requirements
//!
//! Accepted shapes:
//! - `[{...}, ...]`
//! - `{"requirements": [{...}, ...]}`
//! - `{"requirements": {"REQ001": "text" | {...}}}`
//! - a single requirement object

use super::RawRequirement;
use crate::config::DefaultsConfig;
use crate::error::{Error, Result};
use crate::requirement::{Requirement, RequirementSource};
use serde_json::{Map, Value};

const TEXT_KEYS: &[&str] = &["text", "requirement", "description"];
const SINGLE_OBJECT_KEYS: &[&str] = &["id", "text", "requirement"];

pub(super) fn parse(content: &str, defaults: &DefaultsConfig) -> Result<Vec<Requirement>> {
    let value: Value = serde_json::from_str(content)?;

    let raws: Vec<RawRequirement> = match &value {
        Value::Array(items) => from_array(items),
        Value::Object(obj) => match obj.get("requirements") {
            Some(Value::Array(items)) => from_array(items),
            Some(Value::Object(mapping)) => from_mapping(mapping),
            Some(other) => {
                return Err(Error::Other(format!(
                    "\"requirements\" must be an array or object, found {}",
                    kind(other)
                )))
            }
            None if SINGLE_OBJECT_KEYS.iter().any(|k| obj.contains_key(*k)) => {
                vec![from_object(obj)]
            }
            None => Vec::new(),
        },
        other => {
            return Err(Error::Other(format!(
                "expected a JSON array or object, found {}",
                kind(other)
            )))
        }
    };

    Ok(raws
        .into_iter()
        .enumerate()
        .filter_map(|(i, raw)| raw.build(i + 1, RequirementSource::JsonFile, defaults))
        .collect())
}

fn from_array(items: &[Value]) -> Vec<RawRequirement> {
    items
        .iter()
        .map(|item| match item {
            Value::Object(obj) => from_object(obj),
            Value::String(text) => RawRequirement {
                text: Some(text.clone()),
                ..Default::default()
            },
            other => {
                tracing::warn!(kind = kind(other), "skipping non-object requirement entry");
                RawRequirement::default()
            }
        })
        .collect()
}

fn from_mapping(mapping: &Map<String, Value>) -> Vec<RawRequirement> {
    mapping
        .iter()
        .map(|(key, value)| {
            let mut raw = match value {
                Value::Object(obj) => from_object(obj),
                Value::String(text) => RawRequirement {
                    text: Some(text.clone()),
                    ..Default::default()
                },
                other => RawRequirement {
                    text: scalar(other),
                    ..Default::default()
                },
            };
            raw.id = Some(key.clone());
            raw
        })
        .collect()
}

fn from_object(obj: &Map<String, Value>) -> RawRequirement {
    RawRequirement {
        id: obj.get("id").and_then(scalar),
        text: TEXT_KEYS
            .iter()
            .find_map(|k| obj.get(*k).and_then(scalar).filter(|t| !t.trim().is_empty())),
        priority: obj.get("priority").and_then(scalar),
        category: obj.get("category").and_then(scalar),
    }
}

/// Strings and numbers as text; anything else is absent
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
