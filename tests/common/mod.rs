//! Shared builders for the integration suites.

use std::sync::Arc;

use caulk_core::types::{
    Attribute, ClassDeclaration, MemberDeclaration, MemberKind, Parameter, SourceSpan,
};
use caulk_profiles::SAFETY_ATTRIBUTE;

pub fn method(name: &str, params: &[&str], ret: &str, safe: bool) -> Arc<MemberDeclaration> {
    let mut attributes = Vec::new();
    if safe {
        attributes.push(Attribute::new(SAFETY_ATTRIBUTE, ""));
    }
    Arc::new(MemberDeclaration {
        name: name.into(),
        kind: MemberKind::Method,
        parameters: params
            .iter()
            .enumerate()
            .map(|(i, t)| Parameter::new(format!("p{}", i), *t))
            .collect(),
        return_type: ret.into(),
        attributes,
        body: None,
        span: SourceSpan::default(),
    })
}

pub fn event(name: &str, params: &[&str]) -> Arc<MemberDeclaration> {
    Arc::new(MemberDeclaration {
        name: name.into(),
        kind: MemberKind::Event,
        parameters: params
            .iter()
            .enumerate()
            .map(|(i, t)| Parameter::new(format!("p{}", i), *t))
            .collect(),
        return_type: String::new(),
        attributes: vec![],
        body: None,
        span: SourceSpan::default(),
    })
}

/// A fully conformant fungible-token class.
pub fn fungible_token(name: &str) -> ClassDeclaration {
    let mut class = ClassDeclaration::new(name);
    class.span = SourceSpan {
        file: format!("contracts/{}.src", name.to_lowercase()),
        line_start: 1,
        line_end: 80,
    };
    class.base_types.push("FungibleToken".into());
    class.members = vec![
        method("symbol", &[], "String", true),
        method("decimals", &[], "Integer", true),
        method("totalSupply", &[], "Integer", true),
        method("balanceOf", &["Address"], "Integer", true),
        method(
            "transfer",
            &["Address", "Address", "Integer", "Any"],
            "Bool",
            false,
        ),
        event("Transfer", &["Address", "Address", "Integer"]),
        method("onTokenPayment", &["Address", "Integer", "Any"], "", false),
    ];
    class
}

/// A fully conformant non-fungible-token class (divisible variant).
pub fn non_fungible_token(name: &str) -> ClassDeclaration {
    let mut class = ClassDeclaration::new(name);
    class.base_types.push("NonFungibleToken".into());
    class.members = vec![
        method("symbol", &[], "String", true),
        method("decimals", &[], "Integer", true),
        method("totalSupply", &[], "Integer", true),
        method("balanceOf", &["Address"], "Integer", true),
        method("tokensOf", &["Address"], "Iterator", true),
        method("ownerOf", &["ByteString"], "Iterator", true),
        method("transfer", &["Address", "ByteString", "Any"], "Bool", false),
        method(
            "transfer",
            &["Address", "Address", "Integer", "ByteString", "Any"],
            "Bool",
            false,
        ),
        event("Transfer", &["Address", "Address", "Integer", "ByteString"]),
        method(
            "onTokenPayment",
            &["Address", "Integer", "ByteString", "Any"],
            "",
            false,
        ),
    ];
    class
}
