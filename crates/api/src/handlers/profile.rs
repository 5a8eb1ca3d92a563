//! Handlers for the profile resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::validation::validate_input;
use folio_db::models::profile::{CreateProfile, UpdateProfile, UpsertOutcome};
use folio_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::state::AppState;

/// GET /api/profile
///
/// The profile with its skills, projects and links nested.
pub async fn get_profile(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let detail = ProfileRepo::find_detail(&state.pool)
        .await?
        .ok_or(CoreError::NoProfile)?;

    Ok(Json(detail))
}

/// POST /api/profile
///
/// Create the profile (201), or overwrite the existing one (200).
pub async fn upsert_profile(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProfile>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let (profile, outcome) = ProfileRepo::upsert(&state.pool, &input).await?;

    let status = match outcome {
        UpsertOutcome::Created => StatusCode::CREATED,
        UpsertOutcome::Updated => StatusCode::OK,
    };

    tracing::info!(profile_id = profile.id, ?outcome, "Profile saved");

    Ok((status, Json(profile)))
}

/// PUT /api/profile
///
/// Partial update. The profile must exist before the body is looked at.
pub async fn update_profile(
    State(state): State<AppState>,
    body: Result<ApiJson<UpdateProfile>, AppError>,
) -> AppResult<impl IntoResponse> {
    super::require_profile(&state.pool).await?;

    let ApiJson(input) = body?;
    validate_input(&input)?;

    let profile = ProfileRepo::update(&state.pool, &input)
        .await?
        .ok_or(CoreError::NoProfile)?;

    tracing::info!(profile_id = profile.id, "Profile updated");

    Ok(Json(profile))
}
