//! Handler for the skill/project search.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_db::models::search::{SearchParams, SearchResults};
use folio_db::repositories::{ProjectRepo, SkillRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/search?q=
///
/// Case-insensitive substring match on skill names and project titles of
/// the profile. A missing or empty `q` returns everything.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let profile = super::require_profile(&state.pool).await?;

    let skills = SkillRepo::search(&state.pool, profile.id, &params.q).await?;
    let projects = ProjectRepo::search(&state.pool, profile.id, &params.q).await?;

    tracing::debug!(
        query = %params.q,
        skills = skills.len(),
        projects = projects.len(),
        "Search completed"
    );

    Ok(Json(SearchResults { skills, projects }))
}
