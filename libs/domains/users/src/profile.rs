//! Fixed profile-code table.
//!
//! The code → profile mapping is static configuration initialized once at
//! process start; it is not derived from the database.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{UserError, UserResult};
use crate::models::{Profile, Role};

/// Profile code of the administrator role, used by the bootstrap seeder.
pub const ADMIN_PROFILE_CODE: &str = "C01";

static PROFILES: Lazy<HashMap<&'static str, Profile>> = Lazy::new(|| {
    HashMap::from([
        (
            "C01",
            Profile {
                code: "C01".to_string(),
                role_id: 1,
                role_name: Role::Admin,
            },
        ),
        (
            "C02",
            Profile {
                code: "C02".to_string(),
                role_id: 2,
                role_name: Role::User,
            },
        ),
    ])
});

/// Resolve a profile code to its canonical profile.
///
/// Lookup is a case-sensitive exact match; unknown codes fail with
/// [`UserError::InvalidProfileCode`] carrying the offending code.
pub fn resolve(code: &str) -> UserResult<Profile> {
    PROFILES
        .get(code)
        .cloned()
        .ok_or_else(|| UserError::InvalidProfileCode(code.to_string()))
}
