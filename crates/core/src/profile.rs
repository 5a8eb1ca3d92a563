//! Constants describing the single-profile data model.

use crate::types::DbId;

/// Primary key of the one and only profile row.
///
/// The `profiles` table carries a `CHECK (id = 1)` constraint, so every
/// profile lookup is keyed instead of "first row found".
pub const PROFILE_ID: DbId = 1;

/// Level assigned to a skill created without one.
pub const DEFAULT_SKILL_LEVEL: &str = "Intermediate";

/// Number of skills returned by the "top skills" listing.
///
/// "Top" is positional: the first skills in insertion order.
pub const TOP_SKILLS_LIMIT: i64 = 5;

/// Fall back to [`DEFAULT_SKILL_LEVEL`] when no level (or a blank one) is given.
pub fn skill_level_or_default(level: Option<&str>) -> &str {
    match level {
        Some(l) if !l.trim().is_empty() => l,
        _ => DEFAULT_SKILL_LEVEL,
    }
}
