//! Batch orchestration over many classes.
//!
//! The matcher is pure, so the engine fans out across classes with
//! rayon and merges results in input order. Classes whose declaration
//! trees violate the documented shape fail closed: they contribute a
//! structure error and no diagnostics.

use caulk_core::config::CaulkConfig;
use caulk_core::facts::ClassFacts;
use caulk_core::types::{ClassDeclaration, StructureError};
use caulk_profiles::{registry, Profile, ProfileId};
use rayon::prelude::*;

use crate::types::{CheckResult, Diagnostic};
use crate::{matcher, reporter};

/// Conformance engine. Holds configuration only; every check is a pure
/// function of the input tree.
pub struct ConformanceEngine {
    config: CaulkConfig,
}

impl Default for ConformanceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConformanceEngine {
    pub fn new() -> Self {
        Self {
            config: CaulkConfig::default(),
        }
    }

    pub fn with_config(config: CaulkConfig) -> Self {
        Self { config }
    }

    fn enabled_profiles(&self) -> Vec<&'static Profile> {
        registry::all()
            .iter()
            .filter(|p| match p.id {
                ProfileId::Fungible => self.config.enforce.fungible,
                ProfileId::NonFungible => self.config.enforce.non_fungible,
            })
            .collect()
    }

    /// Check one class against every enabled profile.
    pub fn check_class(
        &self,
        class: &ClassDeclaration,
    ) -> Result<Vec<Diagnostic>, StructureError> {
        if self.config.ignore_classes.iter().any(|c| c == &class.name) {
            return Ok(vec![]);
        }
        let facts = ClassFacts::from_class(class)?;
        let mut diagnostics = Vec::new();
        for profile in self.enabled_profiles() {
            for finding in matcher::check(&facts, profile) {
                diagnostics.push(reporter::report(class, finding));
            }
        }
        Ok(diagnostics)
    }

    /// Check a batch of classes in parallel. Output order follows input
    /// order; a malformed tree fails closed without aborting the batch.
    pub fn check_all(&self, classes: &[ClassDeclaration]) -> CheckResult {
        let per_class: Vec<_> = classes
            .par_iter()
            .map(|class| (class.name.clone(), self.check_class(class)))
            .collect();

        let mut diagnostics = Vec::new();
        let mut structure_errors = Vec::new();
        for (name, outcome) in per_class {
            match outcome {
                Ok(d) => diagnostics.extend(d),
                Err(e) => structure_errors.push(format!("{}: {}", name, e)),
            }
        }

        let status = if !structure_errors.is_empty() {
            "error"
        } else if !diagnostics.is_empty() {
            "warning"
        } else {
            "ok"
        };

        CheckResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: status.to_string(),
            classes_checked: classes.len() as u32,
            diagnostics,
            structure_errors,
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
