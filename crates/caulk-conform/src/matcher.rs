//! Structural matcher: locates a profile's required members inside a
//! class and classifies every mismatch as a typed finding.
//!
//! Pure function of its inputs; never panics, never errors. Absence of
//! a construct is a finding, not an exception.

use caulk_core::facts::ClassFacts;
use caulk_core::types::{MemberDeclaration, MemberKind};
use caulk_profiles::{OverloadSignature, Profile, RequiredMember, SAFETY_ATTRIBUTE};

use crate::types::{Finding, FindingKind};

/// Check a class against a profile.
///
/// Findings follow profile declaration order, then check order within a
/// member. An empty result means the class conforms. A class that is
/// not applicable to the profile (no base type, no marker attribute)
/// yields exactly one `MissingApplicabilityMarker` finding and no
/// member-level findings.
pub fn check(facts: &ClassFacts<'_>, profile: &Profile) -> Vec<Finding> {
    if !is_applicable(facts, profile) {
        return vec![Finding {
            profile: profile.id,
            member: facts.name.to_string(),
            kind: FindingKind::MissingApplicabilityMarker,
            detail: format!(
                "class neither inherits `{}` nor carries `[{}(\"{}\")]`",
                profile.base_type, profile.marker_attribute, profile.standard_id
            ),
            expected_params: None,
            target_arity: None,
            target_kind: None,
        }];
    }

    let mut findings = Vec::new();
    for required in &profile.members {
        check_required_member(facts, profile, required, &mut findings);
    }
    // The payment hook runs after the primary set, independent of its
    // outcome.
    check_required_member(facts, profile, &profile.payment_hook, &mut findings);
    findings
}

/// A class is applicable iff it inherits the profile's canonical base
/// type, or a marker attribute of the right name lists the standard
/// identifier as a whole token in its argument.
fn is_applicable(facts: &ClassFacts<'_>, profile: &Profile) -> bool {
    facts.base_types.contains(profile.base_type.as_str())
        || facts.has_marker_token(&profile.marker_attribute, &profile.standard_id)
}

fn check_required_member(
    facts: &ClassFacts<'_>,
    profile: &Profile,
    required: &RequiredMember,
    findings: &mut Vec<Finding>,
) {
    if required.kind == MemberKind::Event {
        check_event(facts, profile, required, findings);
        return;
    }

    let candidates = candidate_members(facts, required);
    if candidates.is_empty() {
        findings.push(missing_whole_member(profile, required));
        return;
    }

    if required.is_overloaded() {
        for signature in &required.signatures {
            check_overload(profile, required, signature, &candidates, findings);
        }
    } else {
        check_simple(profile, required, &required.signatures[0], &candidates, findings);
    }
}

/// Declared members that can satisfy `required`, in declaration order.
///
/// Front-ends routinely lower a zero-arity accessor either way, so a
/// property requirement also accepts a zero-arity method and vice
/// versa. Events never cross kinds.
fn candidate_members<'a>(
    facts: &'a ClassFacts<'_>,
    required: &RequiredMember,
) -> Vec<&'a MemberDeclaration> {
    facts
        .members_named(&required.name)
        .into_iter()
        .map(|m| m.as_ref())
        .filter(|m| match (required.kind, m.kind) {
            (MemberKind::Method, MemberKind::Method) => true,
            (MemberKind::Method, MemberKind::Property) => required
                .signatures
                .iter()
                .any(|s| s.arity() == 0),
            (MemberKind::Property, MemberKind::Property) => true,
            (MemberKind::Property, MemberKind::Method) => m.arity() == 0,
            _ => false,
        })
        .collect()
}

/// One required overload of an overloaded requirement. An exact match
/// satisfies it; otherwise the first arity-matching candidate is
/// reported with type-level findings; otherwise that overload alone is
/// missing.
fn check_overload(
    profile: &Profile,
    required: &RequiredMember,
    signature: &OverloadSignature,
    candidates: &[&MemberDeclaration],
    findings: &mut Vec<Finding>,
) {
    if let Some(exact) = candidates
        .iter()
        .find(|m| signature_matches(required, signature, m))
    {
        check_safety(profile, required, exact, findings);
        return;
    }

    match candidates.iter().find(|m| m.arity() == signature.arity()) {
        Some(closest) => {
            push_shape_findings(profile, required, signature, closest, findings);
            // Best-candidate behavior: safety is still checked on an
            // overload whose types mismatch. See DESIGN.md.
            check_safety(profile, required, closest, findings);
        }
        None => findings.push(Finding {
            profile: profile.id,
            member: required.name.clone(),
            kind: FindingKind::Missing,
            detail: format!(
                "no overload of `{}` with {} parameter(s); expected ({})",
                required.name,
                signature.arity(),
                signature.params.join(", ")
            ),
            expected_params: Some(signature.params.clone()),
            target_arity: None,
            target_kind: None,
        }),
    }
}

/// Simple (single-signature) requirement: all discrepancies against the
/// arity-matching candidate are reported independently; no
/// arity-matching candidate at all is a `WrongParamCount`.
fn check_simple(
    profile: &Profile,
    required: &RequiredMember,
    signature: &OverloadSignature,
    candidates: &[&MemberDeclaration],
    findings: &mut Vec<Finding>,
) {
    match candidates.iter().find(|m| m.arity() == signature.arity()) {
        Some(candidate) => {
            push_shape_findings(profile, required, signature, candidate, findings);
            check_safety(profile, required, candidate, findings);
        }
        None => {
            let found = candidates[0];
            findings.push(Finding {
                profile: profile.id,
                member: required.name.clone(),
                kind: FindingKind::WrongParamCount,
                detail: format!(
                    "expected {} parameter(s), found {}",
                    signature.arity(),
                    found.arity()
                ),
                expected_params: Some(signature.params.clone()),
                target_arity: Some(found.arity()),
                target_kind: Some(found.kind),
            });
        }
    }
}

fn signature_matches(
    required: &RequiredMember,
    signature: &OverloadSignature,
    member: &MemberDeclaration,
) -> bool {
    member.arity() == signature.arity()
        && member
            .parameters
            .iter()
            .zip(&signature.params)
            .all(|(p, expected)| &p.type_name == expected)
        && required.accepts_return(&member.return_type)
}

/// Return-type and per-parameter findings for an arity-matching
/// candidate. Emits nothing when the shape is exact.
fn push_shape_findings(
    profile: &Profile,
    required: &RequiredMember,
    signature: &OverloadSignature,
    member: &MemberDeclaration,
    findings: &mut Vec<Finding>,
) {
    if !required.accepts_return(&member.return_type) {
        findings.push(Finding {
            profile: profile.id,
            member: required.name.clone(),
            kind: FindingKind::WrongReturnType,
            detail: format!(
                "expected `{}`, found `{}`",
                expected_return_text(required),
                display_type(&member.return_type)
            ),
            expected_params: Some(signature.params.clone()),
            target_arity: Some(member.arity()),
            target_kind: Some(member.kind),
        });
    }
    for (index, (param, expected)) in member.parameters.iter().zip(&signature.params).enumerate() {
        if &param.type_name != expected {
            findings.push(Finding {
                profile: profile.id,
                member: required.name.clone(),
                kind: FindingKind::WrongParamType { index },
                detail: format!(
                    "parameter {} expected `{}`, found `{}`",
                    index, expected, param.type_name
                ),
                expected_params: Some(signature.params.clone()),
                target_arity: Some(member.arity()),
                target_kind: Some(member.kind),
            });
        }
    }
}

/// Single comparison path for both safety directions: a required-safe
/// member without the marker and a required-unsafe member with it are
/// the same defect class, reported with opposite `expected_safe`.
fn check_safety(
    profile: &Profile,
    required: &RequiredMember,
    member: &MemberDeclaration,
    findings: &mut Vec<Finding>,
) {
    let Some(expected_safe) = required.safety.expected_safe() else {
        return;
    };
    let is_safe = member.has_attribute(SAFETY_ATTRIBUTE);
    if is_safe != expected_safe {
        let detail = if expected_safe {
            format!("`{}` must carry [{}]", required.name, SAFETY_ATTRIBUTE)
        } else {
            format!("`{}` must not carry [{}]", required.name, SAFETY_ATTRIBUTE)
        };
        findings.push(Finding {
            profile: profile.id,
            member: required.name.clone(),
            kind: FindingKind::WrongSafety { expected_safe },
            detail,
            expected_params: None,
            target_arity: Some(member.arity()),
            target_kind: Some(member.kind),
        });
    }
}

/// Events match by name plus exact ordered parameter types; any shape
/// mismatch collapses to `MissingEvent` — the checker does not attempt
/// partial event diagnostics.
fn check_event(
    facts: &ClassFacts<'_>,
    profile: &Profile,
    required: &RequiredMember,
    findings: &mut Vec<Finding>,
) {
    let expected = &required.signatures[0];
    let declared: Vec<_> = facts
        .members_named(&required.name)
        .into_iter()
        .filter(|m| m.kind == MemberKind::Event)
        .collect();

    let satisfied = declared.iter().any(|m| {
        m.arity() == expected.arity()
            && m.parameters
                .iter()
                .zip(&expected.params)
                .all(|(p, e)| &p.type_name == e)
    });
    if satisfied {
        return;
    }

    let detail = if declared.is_empty() {
        format!(
            "event `{}({})` is not declared",
            required.name,
            expected.params.join(", ")
        )
    } else {
        format!(
            "event `{}` is declared but its parameter types differ from ({})",
            required.name,
            expected.params.join(", ")
        )
    };
    findings.push(Finding {
        profile: profile.id,
        member: required.name.clone(),
        kind: FindingKind::MissingEvent,
        detail,
        expected_params: Some(expected.params.clone()),
        target_arity: None,
        target_kind: None,
    });
}

fn missing_whole_member(profile: &Profile, required: &RequiredMember) -> Finding {
    Finding {
        profile: profile.id,
        member: required.name.clone(),
        kind: FindingKind::Missing,
        detail: format!("no declaration of `{}`", required.name),
        expected_params: None,
        target_arity: None,
        target_kind: None,
    }
}

fn expected_return_text(required: &RequiredMember) -> String {
    if required.returns.is_empty() {
        "Void".to_string()
    } else {
        required.returns.join("` or `")
    }
}

fn display_type(name: &str) -> &str {
    if name.is_empty() {
        "Void"
    } else {
        name
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
