//! Route definitions for the project resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes mounted at `/projects`.
///
/// ```text
/// GET    /       -> list_projects
/// POST   /       -> create_project
/// DELETE /{id}   -> delete_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_projects).post(projects::create_project))
        .route("/{id}", delete(projects::delete_project))
}
