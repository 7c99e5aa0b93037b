//! Handlers for the finance sections: assets, liabilities, salaries,
//! dividends, and monthly payments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use maison_core::error::CoreError;
use maison_core::types::DbId;
use maison_db::models::finance::{
    CreateAsset, CreateDividend, CreateLiability, CreateMonthlyPayment, CreateSalary, UpdateAsset,
    UpdateLiability, UpdateMonthlyPayment, UpdateSalary,
};
use maison_db::repositories::{
    AssetRepo, DividendRepo, EmployeeRepo, LiabilityRepo, MonthlyPaymentRepo, SalaryRepo,
};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

// ===========================================================================
// ASSET HANDLERS
// ===========================================================================

/// List all assets. `GET /finance/assets`
pub async fn list_assets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = AssetRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// Create a new asset. `POST /finance/assets`
pub async fn create_asset(
    State(state): State<AppState>,
    Json(body): Json<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    let created = AssetRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, name = %created.name, "Asset created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// Get a single asset. `GET /finance/assets/{id}`
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Asset", id))?;
    Ok(Json(DataResponse { data: asset }))
}

/// Update an asset. `PUT /finance/assets/{id}`
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateAsset>,
) -> AppResult<impl IntoResponse> {
    let updated = AssetRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found("Asset", id))?;
    tracing::info!(id = updated.id, "Asset updated");
    Ok(Json(DataResponse { data: updated }))
}

/// Delete an asset. `DELETE /finance/assets/{id}`
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if AssetRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Asset deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Asset", id))
    }
}

// ===========================================================================
// LIABILITY HANDLERS
// ===========================================================================

/// List all liabilities. `GET /finance/liabilities`
pub async fn list_liabilities(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = LiabilityRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// Create a new liability. `POST /finance/liabilities`
pub async fn create_liability(
    State(state): State<AppState>,
    Json(body): Json<CreateLiability>,
) -> AppResult<impl IntoResponse> {
    let created = LiabilityRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, name = %created.name, "Liability created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// Get a single liability. `GET /finance/liabilities/{id}`
pub async fn get_liability(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let liability = LiabilityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Liability", id))?;
    Ok(Json(DataResponse { data: liability }))
}

/// Update a liability. `PUT /finance/liabilities/{id}`
pub async fn update_liability(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateLiability>,
) -> AppResult<impl IntoResponse> {
    let updated = LiabilityRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found("Liability", id))?;
    tracing::info!(id = updated.id, "Liability updated");
    Ok(Json(DataResponse { data: updated }))
}

/// Delete a liability. `DELETE /finance/liabilities/{id}`
pub async fn delete_liability(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if LiabilityRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Liability deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Liability", id))
    }
}

// ===========================================================================
// SALARY HANDLERS
// ===========================================================================

#[derive(Debug, Deserialize)]
pub struct SalaryListParams {
    pub employee_id: DbId,
}

/// List the salary history of an employee.
/// `GET /finance/salaries?employee_id=`
pub async fn list_salaries(
    State(state): State<AppState>,
    Query(params): Query<SalaryListParams>,
) -> AppResult<impl IntoResponse> {
    let items = SalaryRepo::list_for_employee(&state.pool, params.employee_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// Create a new salary record. `POST /finance/salaries`
pub async fn create_salary(
    State(state): State<AppState>,
    Json(body): Json<CreateSalary>,
) -> AppResult<impl IntoResponse> {
    EmployeeRepo::find_by_id(&state.pool, body.employee_id)
        .await?
        .ok_or_else(|| not_found("Employee", body.employee_id))?;

    let created = SalaryRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, employee_id = created.employee_id, "Salary created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// Update a salary record. `PUT /finance/salaries/{id}`
pub async fn update_salary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateSalary>,
) -> AppResult<impl IntoResponse> {
    let updated = SalaryRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found("Salary", id))?;
    tracing::info!(id = updated.id, "Salary updated");
    Ok(Json(DataResponse { data: updated }))
}

/// Delete a salary record. `DELETE /finance/salaries/{id}`
pub async fn delete_salary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if SalaryRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Salary deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Salary", id))
    }
}

// ===========================================================================
// DIVIDEND HANDLERS
// ===========================================================================

/// List all dividend records. `GET /finance/dividends`
pub async fn list_dividends(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = DividendRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// Create a new dividend record. `POST /finance/dividends`
pub async fn create_dividend(
    State(state): State<AppState>,
    Json(body): Json<CreateDividend>,
) -> AppResult<impl IntoResponse> {
    let created = DividendRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, source = %created.source, "Dividend recorded");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// Delete a dividend record. `DELETE /finance/dividends/{id}`
pub async fn delete_dividend(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DividendRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Dividend deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Dividend", id))
    }
}

// ===========================================================================
// MONTHLY PAYMENT HANDLERS
// ===========================================================================

/// List all recurring payments. `GET /finance/monthly-payments`
pub async fn list_monthly_payments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = MonthlyPaymentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// Create a new recurring payment. `POST /finance/monthly-payments`
pub async fn create_monthly_payment(
    State(state): State<AppState>,
    Json(body): Json<CreateMonthlyPayment>,
) -> AppResult<impl IntoResponse> {
    if !(1..=31).contains(&body.day_of_month) {
        return Err(CoreError::Validation("day_of_month must be between 1 and 31".into()).into());
    }
    let created = MonthlyPaymentRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, payee = %created.payee, "Monthly payment created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// Get a single recurring payment. `GET /finance/monthly-payments/{id}`
pub async fn get_monthly_payment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let payment = MonthlyPaymentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("MonthlyPayment", id))?;
    Ok(Json(DataResponse { data: payment }))
}

/// Update a recurring payment. `PUT /finance/monthly-payments/{id}`
pub async fn update_monthly_payment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateMonthlyPayment>,
) -> AppResult<impl IntoResponse> {
    if let Some(day) = body.day_of_month {
        if !(1..=31).contains(&day) {
            return Err(
                CoreError::Validation("day_of_month must be between 1 and 31".into()).into(),
            );
        }
    }
    let updated = MonthlyPaymentRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found("MonthlyPayment", id))?;
    tracing::info!(id = updated.id, "Monthly payment updated");
    Ok(Json(DataResponse { data: updated }))
}

/// Delete a recurring payment. `DELETE /finance/monthly-payments/{id}`
pub async fn delete_monthly_payment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if MonthlyPaymentRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Monthly payment deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("MonthlyPayment", id))
    }
}
