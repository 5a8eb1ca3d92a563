//! Link entity model and DTOs.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `links` table.
///
/// `link_type` is a free-text category such as `"github"` or `"linkedin"`,
/// serialized as `type`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Link {
    pub id: DbId,
    #[serde(rename = "type")]
    pub link_type: Option<String>,
    pub url: Option<String>,
    #[serde(skip_serializing)]
    pub profile_id: DbId,
}

/// DTO for attaching a link to the profile.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateLink {
    #[serde(rename = "type", default)]
    pub link_type: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Link url is required"))]
    pub url: String,
}
