use caulk_core::types::MemberKind;
use serde::{Deserialize, Serialize};

/// Identity of a built-in profile. One diagnostic rule code per profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileId {
    Fungible,
    NonFungible,
}

impl ProfileId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileId::Fungible => "fungible-token-standard",
            ProfileId::NonFungible => "non-fungible-token-standard",
        }
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Safety classification required of a member.
///
/// "Safe" is a declarative marker: the member asserts it does not mutate
/// persistent state or emit events. The checker verifies the marker is
/// present or absent as required; it never proves the assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyRequirement {
    /// Member must carry the safety marker.
    Safe,
    /// Member must not carry the safety marker (it is expected to
    /// mutate state or emit events, and claiming otherwise misleads
    /// callers).
    Unsafe,
    Unconstrained,
}

impl SafetyRequirement {
    /// The required marker presence, or `None` when unconstrained.
    pub fn expected_safe(&self) -> Option<bool> {
        match self {
            SafetyRequirement::Safe => Some(true),
            SafetyRequirement::Unsafe => Some(false),
            SafetyRequirement::Unconstrained => None,
        }
    }
}

/// One acceptable parameter-type sequence for a required member.
///
/// Type names are canonical strings and compare textually. Two spellings
/// of an equivalent type will not match; this is a deliberate
/// simplification, not an oversight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverloadSignature {
    pub params: Vec<String>,
}

impl OverloadSignature {
    pub fn new(params: &[&str]) -> Self {
        Self {
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A member a profile requires the class to declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredMember {
    pub name: String,
    pub kind: MemberKind,
    /// One or more acceptable parameter-type sequences. Requirements
    /// with two or more signatures are overloaded: every signature must
    /// be satisfied by some declared overload.
    pub signatures: Vec<OverloadSignature>,
    /// Acceptable return type names. Empty means the member returns
    /// nothing (and events always leave this empty).
    pub returns: Vec<String>,
    pub safety: SafetyRequirement,
}

impl RequiredMember {
    pub fn is_overloaded(&self) -> bool {
        self.signatures.len() > 1
    }

    /// True when `return_type` satisfies this requirement's return set.
    pub fn accepts_return(&self, return_type: &str) -> bool {
        if self.returns.is_empty() {
            return_type.is_empty() || return_type == "Void"
        } else {
            self.returns.iter().any(|r| r == return_type)
        }
    }
}

/// A named standard profile: applicability rule plus ordered
/// requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    /// Diagnostic rule code, shared by every finding of this profile.
    pub rule_code: String,
    /// Identifier the marker attribute's argument must contain.
    pub standard_id: String,
    /// Canonical base type that makes a class applicable by inheritance.
    pub base_type: String,
    /// Attribute name that makes a class applicable declaratively.
    pub marker_attribute: String,
    /// Primary requirements, in declaration order.
    pub members: Vec<RequiredMember>,
    /// Secondary requirement checked after the primary set, regardless
    /// of its outcome.
    pub payment_hook: RequiredMember,
}

// Construction helpers shared by the built-in profile definitions.

pub(crate) fn method(
    name: &str,
    params: &[&str],
    returns: &[&str],
    safety: SafetyRequirement,
) -> RequiredMember {
    RequiredMember {
        name: name.to_string(),
        kind: MemberKind::Method,
        signatures: vec![OverloadSignature::new(params)],
        returns: returns.iter().map(|r| r.to_string()).collect(),
        safety,
    }
}

pub(crate) fn overloaded_method(
    name: &str,
    signatures: &[&[&str]],
    returns: &[&str],
    safety: SafetyRequirement,
) -> RequiredMember {
    RequiredMember {
        name: name.to_string(),
        kind: MemberKind::Method,
        signatures: signatures.iter().map(|s| OverloadSignature::new(s)).collect(),
        returns: returns.iter().map(|r| r.to_string()).collect(),
        safety,
    }
}

pub(crate) fn event(name: &str, params: &[&str]) -> RequiredMember {
    RequiredMember {
        name: name.to_string(),
        kind: MemberKind::Event,
        signatures: vec![OverloadSignature::new(params)],
        returns: vec![],
        safety: SafetyRequirement::Unconstrained,
    }
}
