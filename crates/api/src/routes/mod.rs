pub mod frontend;
pub mod health;
pub mod profile;
pub mod projects;
pub mod search;
pub mod skills;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                 GET
///
/// /profile                GET, POST (create or overwrite), PUT (partial)
///
/// /skills                 GET, POST
/// /skills/top             GET (first five skills)
/// /skills/{id}            DELETE
///
/// /projects               GET, POST
/// /projects/{id}          DELETE
///
/// /search?q=              GET
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/profile", profile::router())
        .nest("/skills", skills::router())
        .nest("/projects", projects::router())
        .nest("/search", search::router())
}
