// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # reqgen - Requirement-driven test case generation
//!
//! Classifies natural-language requirements and expands them into
//! structured, prioritised, traceable test cases.
//!
//! ## Core Concept
//!
//! A **requirement** is a single statement such as *"Password must be at
//! least 8 characters"*. reqgen reads it with keyword tables, no language
//! model involved, and derives:
//!
//! - **Classification**: security, performance, usability, business,
//!   technical or functional
//! - **Risks, integration points and test data needs**
//! - **Boundary values** for every number in the text (n-1, n, n+1)
//! - **Test cases** from fixed templates, one per scenario
//!
//! Identical input always yields identical output.
//!
//! ## Quick Start
//!
//! ```rust
//! use reqgen::{generate_test_cases, Level, Requirement, TestType};
//!
//! let reqs = vec![
//!     Requirement::new("REQ001", "Password must be at least 8 characters")?
//!         .with_priority(Level::High),
//!     Requirement::new("REQ002", "Users can search orders by date")?,
//! ];
//!
//! let cases = generate_test_cases(&reqs);
//!
//! assert!(cases.iter().any(|c| c.test_type == TestType::Boundary));
//! assert!(cases.iter().all(|c| c.has_tag(&format!("traces_to_{}", c.requirement_id))));
//! # Ok::<(), reqgen::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                                                               │
//! │  FILES (.csv / .json / .txt / .md)                            │
//! │       │                                                       │
//! │       └──► ingest::load_file ──► Vec<Requirement>             │
//! │                                                               │
//! │  PIPELINE                                                     │
//! │       │                                                       │
//! │       ├──► analyze(req) ──► RequirementAnalysis               │
//! │       ├──► testgen ──► Vec<TestCase>                          │
//! │       ├──► validate ──► repaired cases                        │
//! │       ├──► optimize (dedup, prioritize, trace)                │
//! │       └──► finalize ──► TestSuite + SuiteStatistics           │
//! │                                                               │
//! │  OUTPUT                                                       │
//! │       ├──► report::render_summary ──► text                    │
//! │       └──► export::to_json ──► JSON                           │
//! │                                                               │
//! └───────────────────────────────────────────────────────────────┘
//! ```

// Data model
pub mod config;
pub mod error;
pub mod requirement;
pub mod testcase;

// Operations
pub mod analysis;
pub mod optimize;
pub mod pipeline;
pub mod testgen;
pub mod validate;

// Input / output
pub mod export;
pub mod ingest;
pub mod report;
pub mod stats;

// Re-exports
pub use analysis::{
    analyze, PerformanceNeeds, RequirementAnalysis, RequirementAnalyzer, RequirementType,
    SecurityNeeds,
};
pub use config::{GeneratorConfig, OutputFormat, CONFIG_FILE};
pub use error::{Error, Result};
pub use ingest::{load_file, InputFormat};
pub use optimize::{add_traceability, deduplicate, optimize, prioritize};
pub use pipeline::{generate_test_cases, Pipeline, TestSuite};
pub use report::render_summary;
pub use requirement::{Level, Requirement, RequirementSource};
pub use stats::SuiteStatistics;
pub use testcase::{estimate_test_time, IdSequence, TestCase, TestType};
pub use testgen::TestCaseGenerator;
pub use validate::{validate_test_cases, ValidationOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
