//! Plain-text and Markdown requirements
//!
//! Line rules, first match wins:
//! - blank line: ends the current requirement
//! - numbered item (`1. ...`) or bullet (`-`, `*`, `•`, `→`) with more than
//!   5 characters of text: new requirement with an auto id
//! - labelled line (`REQ-12: ...`, `R4 ...`, `LOGIN1: ...`): new requirement
//!   with that id
//! - any other line ending with `:` is a heading and is skipped
//! - longer than 20 characters with no current requirement: new requirement
//! - longer than 10 characters: appended to the current requirement
//! - anything else ends the current requirement

use crate::config::DefaultsConfig;
use crate::requirement::{auto_id, Requirement, RequirementSource};
use regex::Regex;
use std::sync::OnceLock;

const BULLETS: [char; 4] = ['-', '*', '•', '→'];
const MIN_LIST_ITEM_CHARS: usize = 5;
const MIN_UNLABELED_CHARS: usize = 20;
const MIN_CONTINUATION_CHARS: usize = 10;

fn numbered_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s+").expect("valid numbered-list regex"))
}

fn labelled_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(REQ[_-]?\d+|R\d+|\w+\d+):?\s*(.+)").expect("valid requirement-id regex")
    })
}

/// Classified line
enum Line<'a> {
    Blank,
    Heading,
    ListItem(&'a str),
    Labelled { id: &'a str, text: &'a str },
    Prose(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(m) = numbered_item().find(line) {
        return Line::ListItem(line[m.end()..].trim());
    }
    if let Some(rest) = line.strip_prefix(BULLETS) {
        return Line::ListItem(rest.trim());
    }
    if let Some(caps) = labelled_line().captures(line) {
        if let (Some(id), Some(text)) = (caps.get(1), caps.get(2)) {
            return Line::Labelled {
                id: id.as_str(),
                text: text.as_str().trim(),
            };
        }
    }
    if line.ends_with(':') {
        return Line::Heading;
    }
    Line::Prose(line)
}

pub(super) fn parse(content: &str, defaults: &DefaultsConfig) -> Vec<Requirement> {
    let mut parser = TextParser::new(defaults);
    for (index, raw) in content.lines().enumerate() {
        parser.feed(index + 1, raw.trim());
    }
    parser.requirements
}

struct TextParser<'d> {
    defaults: &'d DefaultsConfig,
    requirements: Vec<Requirement>,
    /// Index into `requirements` of the one still accepting continuation lines
    current: Option<usize>,
    next_auto_id: usize,
}

impl<'d> TextParser<'d> {
    fn new(defaults: &'d DefaultsConfig) -> Self {
        Self {
            defaults,
            requirements: Vec::new(),
            current: None,
            next_auto_id: 1,
        }
    }

    fn feed(&mut self, line_number: usize, line: &str) {
        match classify(line) {
            Line::Blank => self.current = None,
            Line::Heading => {}
            Line::ListItem(text) => {
                if text.chars().count() > MIN_LIST_ITEM_CHARS {
                    let id = self.auto_id();
                    self.start(id, text, line_number);
                } else {
                    self.current = None;
                }
            }
            Line::Labelled { id, text } => self.start(id.to_string(), text, line_number),
            Line::Prose(text) => {
                let len = text.chars().count();
                match self.current {
                    None if len > MIN_UNLABELED_CHARS => {
                        let id = self.auto_id();
                        self.start(id, text, line_number);
                    }
                    Some(i) if len > MIN_CONTINUATION_CHARS => {
                        let req = &mut self.requirements[i];
                        req.text.push(' ');
                        req.text.push_str(text);
                    }
                    _ => self.current = None,
                }
            }
        }
    }

    fn auto_id(&mut self) -> String {
        let id = auto_id(self.next_auto_id);
        self.next_auto_id += 1;
        id
    }

    fn start(&mut self, id: String, text: &str, line_number: usize) {
        match Requirement::new(id, text) {
            Ok(req) => {
                self.requirements.push(
                    req.with_priority(self.defaults.priority)
                        .with_category(self.defaults.category.clone())
                        .with_source(RequirementSource::TextFile)
                        .with_line_number(line_number),
                );
                self.current = Some(self.requirements.len() - 1);
            }
            Err(e) => {
                tracing::debug!(line = line_number, error = %e, "skipping line");
                self.current = None;
            }
        }
    }
}
