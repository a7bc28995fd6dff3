//! Process-wide profile registry.
//!
//! Built once on first access, read-only afterwards, safe to share
//! across concurrent checks.

use std::sync::OnceLock;

use crate::types::{Profile, ProfileId};
use crate::{fungible, nonfungible};

static REGISTRY: OnceLock<Vec<Profile>> = OnceLock::new();

/// All built-in profiles, in rule-code order.
pub fn all() -> &'static [Profile] {
    REGISTRY.get_or_init(|| vec![fungible::profile(), nonfungible::profile()])
}

/// Look up a profile by id.
pub fn find(id: ProfileId) -> &'static Profile {
    all()
        .iter()
        .find(|p| p.id == id)
        .expect("registry contains every ProfileId variant")
}

/// Look up a profile by its standard name (e.g. "fungible-token-standard").
pub fn find_by_name(name: &str) -> Option<&'static Profile> {
    all().iter().find(|p| p.id.as_str() == name)
}
