//! Route definitions for the `/task-helpers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::task_helper;
use crate::state::AppState;

/// Routes mounted at `/task-helpers`.
///
/// ```text
/// GET    /     -> list_task_helpers
/// POST   /     -> create_task_helper
/// GET    /{id} -> get_task_helper
/// PUT    /{id} -> update_task_helper
/// DELETE /{id} -> delete_task_helper
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(task_helper::list_task_helpers).post(task_helper::create_task_helper),
        )
        .route(
            "/{id}",
            get(task_helper::get_task_helper)
                .put(task_helper::update_task_helper)
                .delete(task_helper::delete_task_helper),
        )
}
