//! Stable identifiers for checks and conflict codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_DEPS_NO_OVERWRITE: &str = "deps.no_overwrite";

// Codes: deps.no_overwrite
pub const CODE_VERSION_OVERRIDE: &str = "version_override";
pub const CODE_SCOPE_OVERRIDE: &str = "scope_override";
