//! Project entity model and DTOs.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[serde(skip_serializing)]
    pub profile_id: DbId,
}

/// DTO for adding a project to the profile.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProject {
    #[serde(default)]
    #[validate(length(min = 1, message = "Project title is required"))]
    pub title: String,
    /// Stored as an empty string when omitted.
    #[serde(default)]
    pub description: Option<String>,
}
