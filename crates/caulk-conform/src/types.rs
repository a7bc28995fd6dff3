use caulk_core::types::{MemberKind, SourceSpan};
use caulk_profiles::ProfileId;
use serde::{Deserialize, Serialize};

/// Every diagnostic caulk emits is a warning: a non-conforming class is
/// still deployable, it just fails the standard it claims.
pub const SEVERITY_WARNING: &str = "WARNING";

/// The category of a single detected discrepancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Class carries neither the profile's base type nor its marker
    /// attribute. Always the only finding for such a class.
    MissingApplicabilityMarker,
    /// No declaration satisfies the required member (or one of its
    /// required overloads).
    Missing,
    WrongReturnType,
    WrongParamCount,
    /// Parameter at `index` has the wrong type.
    WrongParamType { index: usize },
    /// Safety marker present/absent against the requirement.
    /// `expected_safe = true` means the marker is required but missing;
    /// `false` means it is present but forbidden.
    WrongSafety { expected_safe: bool },
    /// Required event is absent or its parameter-type list differs.
    MissingEvent,
}

impl FindingKind {
    pub fn category(&self) -> &'static str {
        match self {
            FindingKind::MissingApplicabilityMarker => "missing_applicability_marker",
            FindingKind::Missing => "missing_member",
            FindingKind::WrongReturnType => "wrong_return_type",
            FindingKind::WrongParamCount => "wrong_param_count",
            FindingKind::WrongParamType { .. } => "wrong_param_type",
            FindingKind::WrongSafety { .. } => "wrong_safety",
            FindingKind::MissingEvent => "missing_event",
        }
    }
}

/// One discrepancy between a class and a profile requirement.
///
/// `expected_params` names the specific overload signature a `Missing`
/// finding refers to (absent when no declaration shares the name at
/// all). `target_arity` and `target_kind` identify the declared member
/// the finding is about, so fixes can locate the exact declaration:
/// overloads share a name, and a property may shadow a zero-arity
/// method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub profile: ProfileId,
    pub member: String,
    pub kind: FindingKind,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_params: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_arity: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_kind: Option<MemberKind>,
}

/// A user-facing diagnostic record: one finding, formatted, with the
/// profile's rule code and the class's location and content hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule: String,
    pub severity: String,
    pub message: String,
    pub class_name: String,
    pub class_hash: String,
    pub span: SourceSpan,
    pub finding: Finding,
}

/// Result of checking a batch of classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub version: String,
    pub status: String, // "ok" | "warning" | "error"
    pub classes_checked: u32,
    pub diagnostics: Vec<Diagnostic>,
    /// Declaration trees that violated their documented shape; these
    /// classes fail closed and produce no diagnostics.
    pub structure_errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_kind_categories() {
        assert_eq!(
            FindingKind::WrongParamType { index: 2 }.category(),
            "wrong_param_type"
        );
        assert_eq!(
            FindingKind::WrongSafety { expected_safe: true }.category(),
            "wrong_safety"
        );
    }

    #[test]
    fn test_finding_serde_roundtrip() {
        let finding = Finding {
            profile: ProfileId::Fungible,
            member: "transfer".into(),
            kind: FindingKind::WrongSafety { expected_safe: false },
            detail: "marked [Safe] but must not be".into(),
            expected_params: None,
            target_arity: Some(4),
            target_kind: Some(MemberKind::Method),
        };
        let json = serde_json::to_string(&finding).unwrap();
        let back: Finding = serde_json::from_str(&json).unwrap();
        assert_eq!(back, finding);
    }
}
