//! Derived, read-only view of a class declaration.
//!
//! The matcher never walks the raw tree directly: `ClassFacts` is built
//! once per class per check, validates the documented tree shape, and
//! exposes the lookups the matcher needs (base-type set, marker
//! attributes, members indexed by name in declaration order).

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::types::{ClassDeclaration, MemberDeclaration, SourceSpan, StructureError};

/// Per-check facts about a class. Borrows from the declaration; building
/// one performs the only shape validation the checker does.
#[derive(Debug)]
pub struct ClassFacts<'a> {
    pub name: &'a str,
    pub span: &'a SourceSpan,
    pub base_types: HashSet<&'a str>,
    /// Marker attributes as (name, argument-text) pairs.
    pub markers: Vec<(&'a str, &'a str)>,
    pub members: &'a [Arc<MemberDeclaration>],
    by_name: HashMap<&'a str, Vec<usize>>,
}

impl<'a> ClassFacts<'a> {
    /// Derive facts from a class declaration.
    ///
    /// Fails closed on parser contract violations: an event declaring a
    /// return type, or a member/class with an empty name. Absence of
    /// base types, attributes, or members is not an error — it is
    /// absence of the feature.
    pub fn from_class(class: &'a ClassDeclaration) -> Result<Self, StructureError> {
        if class.name.is_empty() {
            return Err(StructureError::UnnamedClass);
        }

        let mut by_name: HashMap<&str, Vec<usize>> = HashMap::new();
        for (idx, member) in class.members.iter().enumerate() {
            if member.name.is_empty() {
                return Err(StructureError::UnnamedMember {
                    class: class.name.clone(),
                });
            }
            if member.kind == crate::types::MemberKind::Event && !member.return_type.is_empty() {
                return Err(StructureError::EventReturnsValue {
                    class: class.name.clone(),
                    member: member.name.clone(),
                    return_type: member.return_type.clone(),
                });
            }
            by_name.entry(member.name.as_str()).or_default().push(idx);
        }

        Ok(Self {
            name: &class.name,
            span: &class.span,
            base_types: class.base_types.iter().map(String::as_str).collect(),
            markers: class
                .attributes
                .iter()
                .map(|a| (a.name.as_str(), a.argument.as_str()))
                .collect(),
            members: &class.members,
            by_name,
        })
    }

    /// Members sharing `name`, in declaration order.
    pub fn members_named(&self, name: &str) -> Vec<&'a Arc<MemberDeclaration>> {
        match self.by_name.get(name) {
            Some(indices) => indices.iter().map(|&i| &self.members[i]).collect(),
            None => Vec::new(),
        }
    }

    /// True when any marker attribute has the given name and its
    /// argument list carries `standard_id` as a whole token.
    pub fn has_marker_token(&self, attribute: &str, standard_id: &str) -> bool {
        self.markers
            .iter()
            .any(|(name, arg)| *name == attribute && argument_has_token(arg, standard_id))
    }
}

/// Whether a comma-separated attribute argument list names `token`.
///
/// Tokens compare whole, after stripping whitespace and quotes: one
/// standard id being a substring of another (`fungible-token` inside
/// `non-fungible-token`) must not make a class applicable to both.
pub fn argument_has_token(argument: &str, token: &str) -> bool {
    argument
        .split(',')
        .map(|part| part.trim().trim_matches('"'))
        .any(|part| part == token)
}
