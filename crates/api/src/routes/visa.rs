//! Route definitions for the `/visas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::visa;
use crate::state::AppState;

/// Routes mounted at `/visas`.
///
/// ```text
/// GET    /               -> list_visas
/// POST   /               -> create_visa
/// GET    /expiring       -> list_expiring_visas
/// GET    /{id}           -> get_visa
/// PUT    /{id}           -> update_visa
/// DELETE /{id}           -> delete_visa
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(visa::list_visas).post(visa::create_visa))
        .route("/expiring", get(visa::list_expiring_visas))
        .route(
            "/{id}",
            get(visa::get_visa)
                .put(visa::update_visa)
                .delete(visa::delete_visa),
        )
}
