//! Handlers for the project resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::validate_input;
use folio_db::models::project::CreateProject;
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/projects
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = super::require_profile(&state.pool).await?;
    let projects = ProjectRepo::list_for_profile(&state.pool, profile.id).await?;

    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    body: Result<ApiJson<CreateProject>, AppError>,
) -> AppResult<impl IntoResponse> {
    let profile = super::require_owner_profile(&state.pool).await?;

    let ApiJson(input) = body?;
    validate_input(&input)?;

    let project = ProjectRepo::create(&state.pool, profile.id, &input).await?;

    tracing::info!(project_id = project.id, title = %project.title, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}

/// DELETE /api/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProjectRepo::delete(&state.pool, project_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }));
    }

    tracing::info!(project_id, "Project deleted");

    Ok(Json(MessageResponse::new("Project deleted")))
}
