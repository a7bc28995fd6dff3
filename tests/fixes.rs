//! Fix-synthesis integration: every diagnostic's menu applies as a pure
//! tree rewrite, and repeatedly applying first-menu fixes drives a
//! class to full conformance.

mod common;

use caulk_conform::fixes::{fixes_for, ClassFix};
use caulk_conform::types::FindingKind;
use caulk_conform::ConformanceEngine;
use caulk_core::config::CaulkConfig;
use caulk_core::types::ClassDeclaration;
use common::{fungible_token, method};

fn fungible_only() -> ConformanceEngine {
    let mut config = CaulkConfig::default();
    config.enforce.non_fungible = false;
    ConformanceEngine::with_config(config)
}

/// Apply the first offered fix for the first diagnostic until the class
/// is clean. Every step must strictly reduce the diagnostic count.
fn fix_until_clean(engine: &ConformanceEngine, mut class: ClassDeclaration) -> ClassDeclaration {
    for _ in 0..32 {
        let diagnostics = engine.check_class(&class).unwrap();
        let Some(first) = diagnostics.first() else {
            return class;
        };
        let menu = fixes_for(first);
        assert!(
            !menu.is_empty(),
            "no fix offered for {:?}",
            first.finding.kind
        );
        let fixed = menu[0].apply(&class);
        let after = engine.check_class(&fixed).unwrap();
        assert!(
            after.len() < diagnostics.len(),
            "fix {:?} did not make progress: {} -> {}",
            menu[0].describe(),
            diagnostics.len(),
            after.len()
        );
        class = fixed;
    }
    panic!("fix loop did not converge");
}

#[test]
fn stub_fixes_drive_a_gutted_class_to_conformance() {
    let engine = fungible_only();
    let mut class = fungible_token("Gutted");
    class
        .members
        .retain(|m| m.name == "symbol" || m.name == "decimals");

    let clean = fix_until_clean(&engine, class);
    assert!(engine.check_class(&clean).unwrap().is_empty());
    // Stubs land at the end of the member list with bodies.
    let last = clean.members.last().unwrap();
    assert!(last.body.is_some() || last.kind == caulk_core::types::MemberKind::Event);
}

#[test]
fn marker_fix_then_member_fixes_from_nothing() {
    let engine = fungible_only();
    let class = ClassDeclaration::new("FromScratch");

    // The applicability fix cannot "make progress" by count (member
    // checks only start once the class is applicable), so apply it by
    // hand and then run the convergence loop.
    let diagnostics = engine.check_class(&class).unwrap();
    assert_eq!(diagnostics.len(), 1);
    let menu = fixes_for(&diagnostics[0]);
    assert_eq!(menu.len(), 2, "base-type and marker-attribute alternatives");
    let class = menu[1].apply(&class);
    assert!(matches!(menu[1], ClassFix::AddMarkerAttribute { .. }));

    let clean = fix_until_clean(&engine, class);
    let remaining = engine.check_class(&clean).unwrap();
    assert!(remaining.is_empty(), "remaining: {:?}", remaining);
}

#[test]
fn safety_fix_round_trip_matches_spec_example() {
    // Applicable via marker attribute, transfer correct except for a
    // wrong [Safe] marker.
    let engine = fungible_only();
    let mut class = fungible_token("Marked");
    class.base_types.clear();
    class.attributes.push(caulk_core::types::Attribute::new(
        "SupportedStandards",
        "\"fungible-token\", \"royalty\"",
    ));
    class.members.retain(|m| m.name != "transfer");
    class.members.push(method(
        "transfer",
        &["Address", "Address", "Integer", "Any"],
        "Bool",
        true,
    ));

    let diagnostics = engine.check_class(&class).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].finding.kind,
        FindingKind::WrongSafety { expected_safe: false }
    );

    let menu = fixes_for(&diagnostics[0]);
    assert_eq!(menu.len(), 1);
    let fixed = menu[0].apply(&class);
    assert!(engine.check_class(&fixed).unwrap().is_empty());

    // Only the transfer member was replaced.
    for (old, new) in class.members.iter().zip(&fixed.members) {
        if old.name == "transfer" {
            assert!(!std::sync::Arc::ptr_eq(old, new));
        } else {
            assert!(std::sync::Arc::ptr_eq(old, new));
        }
    }
}

#[test]
fn fixes_survive_serialization() {
    let engine = fungible_only();
    let mut class = fungible_token("Wire");
    class.members.retain(|m| m.name != "balanceOf");

    let diagnostics = engine.check_class(&class).unwrap();
    let menu = fixes_for(&diagnostics[0]);
    let json = serde_json::to_string(&menu).unwrap();
    let back: Vec<ClassFix> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, menu);

    // A deserialized fix applies identically.
    assert_eq!(back[0].apply(&class), menu[0].apply(&class));
}
