//! The non-fungible token standard profile (rule C002).
//!
//! Covers both the indivisible and divisible variants: `ownerOf` may
//! return a single `Address` or an `Iterator` of co-owners, and
//! `transfer` is an overloaded requirement with an indivisible
//! (3-parameter) and a divisible (5-parameter) shape.

use crate::types::{event, method, overloaded_method, Profile, ProfileId, SafetyRequirement};

pub const BASE_TYPE: &str = "NonFungibleToken";
pub const MARKER_ATTRIBUTE: &str = "SupportedStandards";
pub const STANDARD_ID: &str = "non-fungible-token";
pub const RULE_CODE: &str = "C002";

pub fn profile() -> Profile {
    Profile {
        id: ProfileId::NonFungible,
        rule_code: RULE_CODE.to_string(),
        standard_id: STANDARD_ID.to_string(),
        base_type: BASE_TYPE.to_string(),
        marker_attribute: MARKER_ATTRIBUTE.to_string(),
        members: vec![
            method("symbol", &[], &["String"], SafetyRequirement::Safe),
            method("decimals", &[], &["Integer"], SafetyRequirement::Safe),
            method("totalSupply", &[], &["Integer"], SafetyRequirement::Safe),
            method("balanceOf", &["Address"], &["Integer"], SafetyRequirement::Safe),
            method("tokensOf", &["Address"], &["Iterator"], SafetyRequirement::Safe),
            method(
                "ownerOf",
                &["ByteString"],
                &["Address", "Iterator"],
                SafetyRequirement::Safe,
            ),
            overloaded_method(
                "transfer",
                &[
                    &["Address", "ByteString", "Any"],
                    &["Address", "Address", "Integer", "ByteString", "Any"],
                ],
                &["Bool"],
                SafetyRequirement::Unsafe,
            ),
            event("Transfer", &["Address", "Address", "Integer", "ByteString"]),
        ],
        payment_hook: method(
            "onTokenPayment",
            &["Address", "Integer", "ByteString", "Any"],
            &[],
            SafetyRequirement::Unsafe,
        ),
    }
}
