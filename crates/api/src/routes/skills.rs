//! Route definitions for the skill resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Skill routes mounted at `/skills`.
///
/// ```text
/// GET    /       -> list_skills
/// POST   /       -> create_skill
/// GET    /top    -> top_skills
/// DELETE /{id}   -> delete_skill
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list_skills).post(skills::create_skill))
        .route("/top", get(skills::top_skills))
        .route("/{id}", delete(skills::delete_skill))
}
