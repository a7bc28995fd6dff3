use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Member kinds in a class declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Method,
    Property,
    Event,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Method => "method",
            MemberKind::Property => "property",
            MemberKind::Event => "event",
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of a declaration in its source file. Opaque to the checker;
/// produced by the parser collaborator and echoed back in diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub file: String,
    pub line_start: u32,
    pub line_end: u32,
}

/// A declarative attribute attached to a class or member.
///
/// `argument` holds the raw argument text as written in source
/// (empty string when the attribute takes no argument).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub argument: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: argument.into(),
        }
    }
}

/// A declared parameter. Type names are canonical strings; the checker
/// compares them textually, never by resolved type identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A single member declaration inside a class.
///
/// Events carry their payload types in `parameters` and have an empty
/// `return_type`. `body` is the member's body text when the parser
/// captured one; synthesized stubs set it to a minimal return expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDeclaration {
    pub name: String,
    pub kind: MemberKind,
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub return_type: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub span: SourceSpan,
}

impl MemberDeclaration {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Ordered parameter type names.
    pub fn parameter_types(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.type_name.as_str()).collect()
    }
}

/// A parsed class declaration: the unit of conformance checking.
///
/// Members sit behind `Arc` so that edits can build a new class value
/// sharing every untouched member with the original. The tree is never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: String,
    #[serde(default)]
    pub span: SourceSpan,
    #[serde(default)]
    pub base_types: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub members: Vec<Arc<MemberDeclaration>>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            span: SourceSpan::default(),
            base_types: Vec::new(),
            attributes: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn has_base_type(&self, name: &str) -> bool {
        self.base_types.iter().any(|b| b == name)
    }
}

/// Contract violations in the declaration tree handed to the checker.
///
/// These are parser bugs, not user-facing findings: the checker fails
/// closed on them instead of guessing.
#[derive(Debug, thiserror::Error)]
pub enum StructureError {
    #[error("event `{class}.{member}` declares a return type (`{return_type}`); events carry only a parameter-type list")]
    EventReturnsValue {
        class: String,
        member: String,
        return_type: String,
    },

    #[error("class `{class}` contains a member declaration with an empty name")]
    UnnamedMember { class: String },

    #[error("class declaration has an empty name")]
    UnnamedClass,
}
