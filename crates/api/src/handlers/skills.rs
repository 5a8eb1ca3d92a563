//! Handlers for the skill resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::profile::TOP_SKILLS_LIMIT;
use folio_core::types::DbId;
use folio_core::validation::validate_input;
use folio_db::models::skill::CreateSkill;
use folio_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/skills
pub async fn list_skills(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = super::require_profile(&state.pool).await?;
    let skills = SkillRepo::list_for_profile(&state.pool, profile.id).await?;

    Ok(Json(skills))
}

/// POST /api/skills
///
/// The profile check runs before the body is parsed, so a missing profile
/// always answers "Please create a profile first".
pub async fn create_skill(
    State(state): State<AppState>,
    body: Result<ApiJson<CreateSkill>, AppError>,
) -> AppResult<impl IntoResponse> {
    let profile = super::require_owner_profile(&state.pool).await?;

    let ApiJson(input) = body?;
    validate_input(&input)?;

    let skill = SkillRepo::create(&state.pool, profile.id, &input).await?;

    tracing::info!(skill_id = skill.id, name = %skill.name, "Skill created");

    Ok((StatusCode::CREATED, Json(skill)))
}

/// DELETE /api/skills/{id}
pub async fn delete_skill(
    State(state): State<AppState>,
    ApiPath(skill_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SkillRepo::delete(&state.pool, skill_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id: skill_id,
        }));
    }

    tracing::info!(skill_id, "Skill deleted");

    Ok(Json(MessageResponse::new("Skill deleted")))
}

/// GET /api/skills/top
///
/// The first skills in insertion order, at most [`TOP_SKILLS_LIMIT`].
pub async fn top_skills(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = super::require_profile(&state.pool).await?;
    let skills = SkillRepo::top(&state.pool, profile.id, TOP_SKILLS_LIMIT).await?;

    Ok(Json(skills))
}
