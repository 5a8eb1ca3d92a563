//! Route definitions for the profile resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Profile routes mounted at `/profile`.
///
/// ```text
/// GET    /    -> get_profile
/// POST   /    -> upsert_profile
/// PUT    /    -> update_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(profile::get_profile)
            .post(profile::upsert_profile)
            .put(profile::update_profile),
    )
}
