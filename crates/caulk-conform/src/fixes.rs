//! Fix synthesis: pure tree-to-tree rewrites that resolve one
//! diagnostic each.
//!
//! `fixes_for` builds the menu for a diagnostic; every entry applies
//! independently. `apply` never mutates its input: it returns a new
//! class sharing every untouched member with the original, and a fix
//! whose target no longer exists (stale diagnostic) returns the input
//! unchanged.

use std::sync::Arc;

use caulk_core::facts::argument_has_token;
use caulk_core::types::{Attribute, ClassDeclaration, MemberDeclaration, MemberKind, Parameter};
use caulk_profiles::{registry, RequiredMember, SafetyRequirement, SAFETY_ATTRIBUTE};
use serde::{Deserialize, Serialize};

use crate::types::{Diagnostic, FindingKind};

/// One selectable rewrite of a class declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "fix")]
pub enum ClassFix {
    /// Insert the profile's canonical base type.
    AddBaseType { base_type: String },
    /// Insert the profile's marker attribute with the standard argument.
    AddMarkerAttribute { attribute: String, argument: String },
    /// Append a conformant member stub at the end of the member list.
    AddMemberStub { member: MemberDeclaration },
    /// Add the safety marker to the declaration with this exact name,
    /// arity, and kind.
    AddSafetyAttribute {
        member: String,
        arity: usize,
        kind: MemberKind,
    },
    /// Remove the safety marker from the declaration with this exact
    /// name, arity, and kind.
    RemoveSafetyAttribute {
        member: String,
        arity: usize,
        kind: MemberKind,
    },
}

impl ClassFix {
    /// Short menu label for hosts.
    pub fn describe(&self) -> String {
        match self {
            ClassFix::AddBaseType { base_type } => {
                format!("Add `{}` to the class's base types", base_type)
            }
            ClassFix::AddMarkerAttribute { attribute, argument } => {
                format!("Add `[{}({})]` to the class", attribute, argument)
            }
            ClassFix::AddMemberStub { member } => format!(
                "Add a stub for {} `{}`",
                member.kind,
                caulk_core::hash::member_signature(member)
            ),
            ClassFix::AddSafetyAttribute { member, arity, .. } => format!(
                "Mark the {}-parameter overload of `{}` [{}]",
                arity, member, SAFETY_ATTRIBUTE
            ),
            ClassFix::RemoveSafetyAttribute { member, arity, .. } => format!(
                "Remove [{}] from the {}-parameter overload of `{}`",
                SAFETY_ATTRIBUTE, arity, member
            ),
        }
    }

    /// Apply this fix, producing a new class declaration. Unchanged
    /// members are shared with the input; a missing target is a no-op.
    pub fn apply(&self, class: &ClassDeclaration) -> ClassDeclaration {
        match self {
            ClassFix::AddBaseType { base_type } => {
                if class.has_base_type(base_type) {
                    return class.clone();
                }
                let mut next = class.clone();
                next.base_types.push(base_type.clone());
                next
            }
            ClassFix::AddMarkerAttribute { attribute, argument } => {
                let already = class.attributes.iter().any(|a| {
                    &a.name == attribute
                        && argument_has_token(&a.argument, argument.trim_matches('"'))
                });
                if already {
                    return class.clone();
                }
                let mut next = class.clone();
                next.attributes.push(Attribute::new(attribute.clone(), argument.clone()));
                next
            }
            ClassFix::AddMemberStub { member } => {
                // Same name, kind, and arity is not enough: an event
                // finding can name a declaration whose parameter types
                // differ, and the stub must still land.
                let exists = class.members.iter().any(|m| {
                    m.name == member.name
                        && m.kind == member.kind
                        && m.parameters.len() == member.parameters.len()
                        && m.parameters
                            .iter()
                            .zip(&member.parameters)
                            .all(|(a, b)| a.type_name == b.type_name)
                });
                if exists {
                    return class.clone();
                }
                let mut next = class.clone();
                next.members.push(Arc::new(member.clone()));
                next
            }
            ClassFix::AddSafetyAttribute { member, arity, kind } => {
                flip_safety(class, member, *arity, *kind, true)
            }
            ClassFix::RemoveSafetyAttribute { member, arity, kind } => {
                flip_safety(class, member, *arity, *kind, false)
            }
        }
    }
}

/// Rewrite exactly the declaration identified by name, arity, and kind.
/// Overloads share a name, and a property can share both name and arity
/// with a method, so all three are part of the target; touching the
/// wrong one would trade one finding for another.
fn flip_safety(
    class: &ClassDeclaration,
    name: &str,
    arity: usize,
    kind: MemberKind,
    add: bool,
) -> ClassDeclaration {
    let target = class
        .members
        .iter()
        .position(|m| m.name == name && m.arity() == arity && m.kind == kind);
    let Some(index) = target else {
        return class.clone(); // stale diagnostic
    };

    let current = &class.members[index];
    if current.has_attribute(SAFETY_ATTRIBUTE) == add {
        return class.clone();
    }

    let mut edited = (**current).clone();
    if add {
        edited.attributes.push(Attribute::new(SAFETY_ATTRIBUTE, ""));
    } else {
        edited.attributes.retain(|a| a.name != SAFETY_ATTRIBUTE);
    }

    let mut next = class.clone();
    next.members[index] = Arc::new(edited);
    next
}

/// The fix menu for one diagnostic. Shape findings (wrong types, wrong
/// arity) have no automated rewrite and yield an empty menu.
pub fn fixes_for(diagnostic: &Diagnostic) -> Vec<ClassFix> {
    let profile = registry::find(diagnostic.finding.profile);
    match &diagnostic.finding.kind {
        FindingKind::MissingApplicabilityMarker => vec![
            ClassFix::AddBaseType {
                base_type: profile.base_type.clone(),
            },
            ClassFix::AddMarkerAttribute {
                attribute: profile.marker_attribute.clone(),
                argument: format!("\"{}\"", profile.standard_id),
            },
        ],
        FindingKind::Missing | FindingKind::MissingEvent => {
            let Some(required) = find_requirement(profile, &diagnostic.finding.member) else {
                return vec![];
            };
            match &diagnostic.finding.expected_params {
                Some(params) => vec![ClassFix::AddMemberStub {
                    member: member_stub(required, params),
                }],
                // Whole member absent: one stub per required overload.
                None => required
                    .signatures
                    .iter()
                    .map(|s| ClassFix::AddMemberStub {
                        member: member_stub(required, &s.params),
                    })
                    .collect(),
            }
        }
        FindingKind::WrongSafety { expected_safe } => {
            let (Some(arity), Some(kind)) = (
                diagnostic.finding.target_arity,
                diagnostic.finding.target_kind,
            ) else {
                return vec![];
            };
            let member = diagnostic.finding.member.clone();
            if *expected_safe {
                vec![ClassFix::AddSafetyAttribute { member, arity, kind }]
            } else {
                vec![ClassFix::RemoveSafetyAttribute { member, arity, kind }]
            }
        }
        FindingKind::WrongReturnType
        | FindingKind::WrongParamCount
        | FindingKind::WrongParamType { .. } => vec![],
    }
}

fn find_requirement<'a>(
    profile: &'a caulk_profiles::Profile,
    name: &str,
) -> Option<&'a RequiredMember> {
    profile
        .members
        .iter()
        .chain(std::iter::once(&profile.payment_hook))
        .find(|m| m.name == name)
}

/// A minimal conformant declaration for a required member: the required
/// signature, the required safety marker, and a trivial body returning
/// the zero value of the return type.
fn member_stub(required: &RequiredMember, params: &[String]) -> MemberDeclaration {
    let return_type = required.returns.first().cloned().unwrap_or_default();
    let mut attributes = Vec::new();
    if required.safety == SafetyRequirement::Safe {
        attributes.push(Attribute::new(SAFETY_ATTRIBUTE, ""));
    }
    MemberDeclaration {
        name: required.name.clone(),
        kind: required.kind,
        parameters: params
            .iter()
            .enumerate()
            .map(|(i, t)| Parameter::new(format!("arg{}", i), t.clone()))
            .collect(),
        return_type: return_type.clone(),
        attributes,
        body: if required.kind == MemberKind::Event {
            None
        } else {
            Some(default_body(&return_type))
        },
        span: Default::default(),
    }
}

fn default_body(return_type: &str) -> String {
    match return_type {
        "" | "Void" => "return".to_string(),
        "Bool" => "return false".to_string(),
        "Integer" => "return 0".to_string(),
        "String" => "return \"\"".to_string(),
        _ => "return null".to_string(),
    }
}

#[cfg(test)]
#[path = "fixes_tests.rs"]
mod tests;
