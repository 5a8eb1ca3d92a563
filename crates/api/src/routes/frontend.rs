//! Static frontend: the single-page app's entry page and its assets.

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ServerConfig;
use crate::state::AppState;

/// Frontend routes mounted at the root.
///
/// ```text
/// GET /               -> {template_dir}/index.html
/// GET /static/{path}  -> {static_dir}/{path}  (404 if missing)
/// ```
pub fn router(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(config.template_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&config.static_dir))
}
