//! Route definitions for the `/daily-tasks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::daily_task;
use crate::state::AppState;

/// Routes mounted at `/daily-tasks`.
///
/// ```text
/// GET    /     -> list_tasks
/// POST   /     -> create_task
/// GET    /{id} -> get_task
/// PUT    /{id} -> update_task
/// DELETE /{id} -> delete_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(daily_task::list_tasks).post(daily_task::create_task))
        .route(
            "/{id}",
            get(daily_task::get_task)
                .put(daily_task::update_task)
                .delete(daily_task::delete_task),
        )
}
