use axum::routing::post;
use axum::Router;

use crate::handlers::detect;
use crate::state::AppState;

/// Detection routes, mounted at the root.
///
/// ```text
/// POST /detect            -> detect_fire
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/detect", post(detect::detect_fire))
}
