//! The fungible token standard profile (rule C001).
//!
//! A conforming class exposes read-only supply and balance queries, an
//! unsafe `transfer`, a `Transfer` event, and the payment hook invoked
//! when tokens are sent to the contract itself.

use crate::types::{event, method, Profile, ProfileId, SafetyRequirement};

pub const BASE_TYPE: &str = "FungibleToken";
pub const MARKER_ATTRIBUTE: &str = "SupportedStandards";
pub const STANDARD_ID: &str = "fungible-token";
pub const RULE_CODE: &str = "C001";

pub fn profile() -> Profile {
    Profile {
        id: ProfileId::Fungible,
        rule_code: RULE_CODE.to_string(),
        standard_id: STANDARD_ID.to_string(),
        base_type: BASE_TYPE.to_string(),
        marker_attribute: MARKER_ATTRIBUTE.to_string(),
        members: vec![
            method("symbol", &[], &["String"], SafetyRequirement::Safe),
            method("decimals", &[], &["Integer"], SafetyRequirement::Safe),
            method("totalSupply", &[], &["Integer"], SafetyRequirement::Safe),
            method("balanceOf", &["Address"], &["Integer"], SafetyRequirement::Safe),
            // transfer mutates balances and emits Transfer; marking it
            // safe would lie to callers.
            method(
                "transfer",
                &["Address", "Address", "Integer", "Any"],
                &["Bool"],
                SafetyRequirement::Unsafe,
            ),
            event("Transfer", &["Address", "Address", "Integer"]),
        ],
        payment_hook: method(
            "onTokenPayment",
            &["Address", "Integer", "Any"],
            &[],
            SafetyRequirement::Unsafe,
        ),
    }
}
