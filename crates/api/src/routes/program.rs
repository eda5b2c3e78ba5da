//! Route definitions for the `/program` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::program;
use crate::state::AppState;

/// Routes mounted at `/program`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(program::list).post(program::create))
        .route("/{id}", get(program::get_by_id))
}
