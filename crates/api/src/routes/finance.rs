//! Route definitions for the `/finance` sections.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::finance;
use crate::state::AppState;

/// Routes mounted at `/finance`.
///
/// ```text
/// GET    /assets                 -> list, create
/// GET    /assets/{id}            -> get, update, delete
///
/// GET    /liabilities            -> list, create
/// GET    /liabilities/{id}       -> get, update, delete
///
/// GET    /salaries?employee_id=  -> list_salaries
/// POST   /salaries               -> create_salary
/// PUT    /salaries/{id}          -> update, delete
///
/// GET    /dividends              -> list, create
/// DELETE /dividends/{id}         -> delete_dividend
///
/// GET    /monthly-payments       -> list, create
/// GET    /monthly-payments/{id}  -> get, update, delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Assets
        .route(
            "/assets",
            get(finance::list_assets).post(finance::create_asset),
        )
        .route(
            "/assets/{id}",
            get(finance::get_asset)
                .put(finance::update_asset)
                .delete(finance::delete_asset),
        )
        // Liabilities
        .route(
            "/liabilities",
            get(finance::list_liabilities).post(finance::create_liability),
        )
        .route(
            "/liabilities/{id}",
            get(finance::get_liability)
                .put(finance::update_liability)
                .delete(finance::delete_liability),
        )
        // Salaries
        .route(
            "/salaries",
            get(finance::list_salaries).post(finance::create_salary),
        )
        .route(
            "/salaries/{id}",
            put(finance::update_salary).delete(finance::delete_salary),
        )
        // Dividends
        .route(
            "/dividends",
            get(finance::list_dividends).post(finance::create_dividend),
        )
        .route("/dividends/{id}", delete(finance::delete_dividend))
        // Monthly payments
        .route(
            "/monthly-payments",
            get(finance::list_monthly_payments).post(finance::create_monthly_payment),
        )
        .route(
            "/monthly-payments/{id}",
            get(finance::get_monthly_payment)
                .put(finance::update_monthly_payment)
                .delete(finance::delete_monthly_payment),
        )
}
