//! Built-in standard profiles for caulk.
//!
//! A profile is a fixed, named specification of the members a contract
//! class must declare to satisfy a token standard:
//! - C001: fungible-token-standard
//! - C002: non-fungible-token-standard
//!
//! Profiles are constructed once, never mutated, and safely shared
//! across concurrent checks.

pub mod fungible;
pub mod nonfungible;
pub mod registry;
pub mod types;

pub use registry::{all, find, find_by_name};
pub use types::{OverloadSignature, Profile, ProfileId, RequiredMember, SafetyRequirement};

/// Attribute asserting a member does not mutate persistent state or
/// emit events. Shared by every standard; checked declaratively.
pub const SAFETY_ATTRIBUTE: &str = "Safe";
