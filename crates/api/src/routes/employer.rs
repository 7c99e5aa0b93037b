//! Route definitions for the `/employers` resource and family members.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::employer;
use crate::state::AppState;

/// Routes mounted at `/employers`.
///
/// ```text
/// GET    /                                 -> list_employers
/// POST   /                                 -> create_employer
/// GET    /{id}                             -> get_employer
/// PUT    /{id}                             -> update_employer
/// DELETE /{id}                             -> delete_employer
///
/// GET    /{employer_id}/family-members      -> list_family_members
/// POST   /{employer_id}/family-members      -> create_family_member
/// PUT    /{employer_id}/family-members/{id} -> update_family_member
/// DELETE /{employer_id}/family-members/{id} -> delete_family_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employer::list_employers).post(employer::create_employer),
        )
        .route(
            "/{id}",
            get(employer::get_employer)
                .put(employer::update_employer)
                .delete(employer::delete_employer),
        )
        .route(
            "/{employer_id}/family-members",
            get(employer::list_family_members).post(employer::create_family_member),
        )
        .route(
            "/{employer_id}/family-members/{id}",
            put(employer::update_family_member).delete(employer::delete_family_member),
        )
}
