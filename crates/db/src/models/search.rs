//! Query parameters and result shape for the skill/project search.

use serde::{Deserialize, Serialize};

use crate::models::project::Project;
use crate::models::skill::Skill;

/// Query parameters for `GET /api/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Substring to look for. Empty matches everything.
    #[serde(default)]
    pub q: String,
}

/// Skills whose name and projects whose title contain the query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}
