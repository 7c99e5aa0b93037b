//! Route definitions for the `/stakeholders` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::stakeholder;
use crate::state::AppState;

/// Routes mounted at `/stakeholders`.
///
/// ```text
/// GET    /     -> list_stakeholders
/// POST   /     -> create_stakeholder
/// GET    /{id} -> get_stakeholder
/// PUT    /{id} -> update_stakeholder
/// DELETE /{id} -> delete_stakeholder
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(stakeholder::list_stakeholders).post(stakeholder::create_stakeholder),
        )
        .route(
            "/{id}",
            get(stakeholder::get_stakeholder)
                .put(stakeholder::update_stakeholder)
                .delete(stakeholder::delete_stakeholder),
        )
}
