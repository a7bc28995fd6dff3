//! Converts findings into user-facing diagnostic records.
//!
//! Pure formatting: one message template per finding kind, the
//! profile's rule code, severity fixed at WARNING. Appending the result
//! to a sink is the caller's business.

use caulk_core::hash::class_hash;
use caulk_core::types::ClassDeclaration;
use caulk_profiles::registry;

use crate::types::{Diagnostic, Finding, FindingKind, SEVERITY_WARNING};

/// Format one finding against the class it was produced for.
pub fn report(class: &ClassDeclaration, finding: Finding) -> Diagnostic {
    let profile = registry::find(finding.profile);
    let message = match &finding.kind {
        FindingKind::MissingApplicabilityMarker => format!(
            "Class `{}` does not declare support for the {}: inherit `{}` or add `[{}(\"{}\")]`",
            class.name, profile.id, profile.base_type, profile.marker_attribute, profile.standard_id
        ),
        FindingKind::Missing => format!(
            "Required member `{}` of the {} is not satisfied: {}",
            finding.member, profile.id, finding.detail
        ),
        FindingKind::WrongReturnType => format!(
            "`{}` has the wrong return type: {}",
            finding.member, finding.detail
        ),
        FindingKind::WrongParamCount => format!(
            "`{}` has the wrong number of parameters: {}",
            finding.member, finding.detail
        ),
        FindingKind::WrongParamType { .. } => format!(
            "`{}` has a wrong parameter type: {}",
            finding.member, finding.detail
        ),
        FindingKind::WrongSafety { expected_safe } => {
            if *expected_safe {
                format!(
                    "`{}` must be marked safe; it promises callers it does not mutate state or emit events",
                    finding.member
                )
            } else {
                format!(
                    "`{}` must not be marked safe; it mutates state or emits events",
                    finding.member
                )
            }
        }
        FindingKind::MissingEvent => format!(
            "Required event of the {} is not satisfied: {}",
            profile.id, finding.detail
        ),
    };

    Diagnostic {
        rule: profile.rule_code.clone(),
        severity: SEVERITY_WARNING.to_string(),
        message,
        class_name: class.name.clone(),
        class_hash: class_hash(class),
        span: class.span.clone(),
        finding,
    }
}
