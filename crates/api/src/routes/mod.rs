pub mod calendar;
pub mod daily_task;
pub mod employee;
pub mod employer;
pub mod finance;
pub mod health;
pub mod meeting;
pub mod stakeholder;
pub mod task_helper;
pub mod trip;
pub mod visa;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /trips                 trip CRUD, bundle, send-details, communications,
///                        destinations, passengers, flights, private jets,
///                        hotels (rooms, assignments), events (participants)
/// /calendar              month and week views with conflicts
/// /employees             employee CRUD (soft delete)
/// /stakeholders          stakeholder CRUD
/// /employers             employer CRUD, family members
/// /task-helpers          task helper CRUD
/// /visas                 visa CRUD, expiring view
/// /finance               assets, liabilities, salaries, dividends,
///                        monthly payments
/// /meetings              meeting CRUD
/// /daily-tasks           daily task CRUD
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/trips", trip::router())
        .nest("/calendar", calendar::router())
        .nest("/employees", employee::router())
        .nest("/stakeholders", stakeholder::router())
        .nest("/employers", employer::router())
        .nest("/task-helpers", task_helper::router())
        .nest("/visas", visa::router())
        .nest("/finance", finance::router())
        .nest("/meetings", meeting::router())
        .nest("/daily-tasks", daily_task::router())
}
