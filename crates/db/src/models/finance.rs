//! Finance entity models and DTOs.
//!
//! Monetary amounts are stored as integer cents alongside an ISO currency
//! code; the API layer never does float arithmetic on them.

use chrono::NaiveDate;
use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// An asset row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub category: Option<String>,
    pub amount_cents: i64,
    pub currency: String,
    pub acquired_on: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an asset. Currency defaults to `USD`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub name: String,
    pub category: Option<String>,
    pub amount_cents: i64,
    pub currency: Option<String>,
    pub acquired_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// DTO for updating an asset. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAsset {
    pub name: Option<String>,
    pub category: Option<String>,
    pub amount_cents: Option<i64>,
    pub currency: Option<String>,
    pub acquired_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Liabilities
// ---------------------------------------------------------------------------

/// A liability row from the `liabilities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Liability {
    pub id: DbId,
    pub name: String,
    pub lender: Option<String>,
    pub amount_cents: i64,
    pub currency: String,
    pub due_on: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a liability. Currency defaults to `USD`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLiability {
    pub name: String,
    pub lender: Option<String>,
    pub amount_cents: i64,
    pub currency: Option<String>,
    pub due_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// DTO for updating a liability. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLiability {
    pub name: Option<String>,
    pub lender: Option<String>,
    pub amount_cents: Option<i64>,
    pub currency: Option<String>,
    pub due_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Salaries
// ---------------------------------------------------------------------------

/// A salary row from the `salaries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Salary {
    pub id: DbId,
    pub employee_id: DbId,
    pub amount_cents: i64,
    pub currency: String,
    pub effective_from: NaiveDate,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a salary record. Currency defaults to `USD`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSalary {
    pub employee_id: DbId,
    pub amount_cents: i64,
    pub currency: Option<String>,
    pub effective_from: NaiveDate,
    pub notes: Option<String>,
}

/// DTO for updating a salary record. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSalary {
    pub amount_cents: Option<i64>,
    pub currency: Option<String>,
    pub effective_from: Option<NaiveDate>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Dividends
// ---------------------------------------------------------------------------

/// A dividend row from the `dividends` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dividend {
    pub id: DbId,
    pub source: String,
    pub amount_cents: i64,
    pub currency: String,
    pub paid_on: NaiveDate,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a dividend record. Currency defaults to `USD`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDividend {
    pub source: String,
    pub amount_cents: i64,
    pub currency: Option<String>,
    pub paid_on: NaiveDate,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Monthly payments
// ---------------------------------------------------------------------------

/// A recurring payment row from the `monthly_payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonthlyPayment {
    pub id: DbId,
    pub payee: String,
    pub amount_cents: i64,
    pub currency: String,
    pub day_of_month: i16,
    pub active: bool,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a recurring payment. Currency defaults to `USD`,
/// `active` to true.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMonthlyPayment {
    pub payee: String,
    pub amount_cents: i64,
    pub currency: Option<String>,
    pub day_of_month: i16,
    pub active: Option<bool>,
    pub notes: Option<String>,
}

/// DTO for updating a recurring payment. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMonthlyPayment {
    pub payee: Option<String>,
    pub amount_cents: Option<i64>,
    pub currency: Option<String>,
    pub day_of_month: Option<i16>,
    pub active: Option<bool>,
    pub notes: Option<String>,
}
