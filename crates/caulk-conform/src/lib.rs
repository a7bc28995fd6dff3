//! Conformance engine for caulk token-standard profiles.
//!
//! Checks class declarations against the built-in profiles and produces
//! findings, one per detected discrepancy:
//! - missing applicability marker (class never opts into the standard)
//! - missing member / missing overload
//! - wrong return type, wrong parameter count, wrong parameter type
//! - wrong safety marker (either direction)
//! - missing or misshapen event
//!
//! Every finding can be turned into a warning diagnostic and, where the
//! fix menu covers it, into a pure tree-to-tree rewrite of the class.

pub mod engine;
pub mod fixes;
pub mod matcher;
pub mod reporter;
pub mod types;

pub use engine::ConformanceEngine;
pub use types::{CheckResult, Diagnostic, Finding, FindingKind};
