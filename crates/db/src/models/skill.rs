//! Skill entity model and DTOs.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub level: String,
    #[serde(skip_serializing)]
    pub profile_id: DbId,
}

/// DTO for adding a skill to the profile.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateSkill {
    #[serde(default)]
    #[validate(length(min = 1, message = "Skill name is required"))]
    pub name: String,
    /// Defaults to `"Intermediate"` if omitted.
    #[serde(default)]
    pub level: Option<String>,
}
