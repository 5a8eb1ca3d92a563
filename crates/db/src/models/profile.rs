//! Profile entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::link::Link;
use crate::models::project::Project;
use crate::models::skill::Skill;

/// The profile row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub education: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A profile together with everything it owns, as returned by `GET /api/profile`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDetail {
    #[serde(flatten)]
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub links: Vec<Link>,
}

/// DTO for creating (or overwriting) the profile.
///
/// Missing `name`/`email` deserialize as empty strings so they fail
/// validation with the same message as explicitly empty ones.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProfile {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name and email are required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Name and email are required"))]
    pub email: String,
    /// `None` when omitted (stored as an empty string), `Some(None)` for an
    /// explicit `null` (stored as NULL).
    #[serde(default, deserialize_with = "super::present")]
    pub education: Option<Option<String>>,
}

/// DTO for a partial profile update. Absent fields keep their current value.
///
/// `education` uses `Option<Option<String>>` so an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Email must not be empty"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::present")]
    pub education: Option<Option<String>>,
}

/// Whether an upsert inserted the profile or overwrote the existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}
