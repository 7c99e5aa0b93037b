//! Repositories for the finance tables: `assets`, `liabilities`,
//! `salaries`, `dividends`, and `monthly_payments`.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::finance::{
    Asset, CreateAsset, CreateDividend, CreateLiability, CreateMonthlyPayment, CreateSalary,
    Dividend, Liability, MonthlyPayment, Salary, UpdateAsset, UpdateLiability,
    UpdateMonthlyPayment, UpdateSalary,
};

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

const ASSET_COLUMNS: &str =
    "id, name, category, amount_cents, currency, acquired_on, notes, created_at, updated_at";

/// Provides CRUD operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (name, category, amount_cents, currency, acquired_on, notes) \
             VALUES ($1, $2, $3, COALESCE($4, 'USD'), $5, $6) \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .bind(input.acquired_on)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all assets by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets ORDER BY name, id");
        sqlx::query_as::<_, Asset>(&query).fetch_all(pool).await
    }

    /// Update an asset. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                amount_cents = COALESCE($4, amount_cents),
                currency = COALESCE($5, currency),
                acquired_on = COALESCE($6, acquired_on),
                notes = COALESCE($7, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .bind(input.acquired_on)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Liabilities
// ---------------------------------------------------------------------------

const LIABILITY_COLUMNS: &str =
    "id, name, lender, amount_cents, currency, due_on, notes, created_at, updated_at";

/// Provides CRUD operations for liabilities.
pub struct LiabilityRepo;

impl LiabilityRepo {
    /// Insert a new liability, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLiability) -> Result<Liability, sqlx::Error> {
        let query = format!(
            "INSERT INTO liabilities (name, lender, amount_cents, currency, due_on, notes) \
             VALUES ($1, $2, $3, COALESCE($4, 'USD'), $5, $6) \
             RETURNING {LIABILITY_COLUMNS}"
        );
        sqlx::query_as::<_, Liability>(&query)
            .bind(&input.name)
            .bind(&input.lender)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .bind(input.due_on)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a liability by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Liability>, sqlx::Error> {
        let query = format!("SELECT {LIABILITY_COLUMNS} FROM liabilities WHERE id = $1");
        sqlx::query_as::<_, Liability>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all liabilities by due date, soonest first, undated last.
    pub async fn list(pool: &PgPool) -> Result<Vec<Liability>, sqlx::Error> {
        let query = format!(
            "SELECT {LIABILITY_COLUMNS} FROM liabilities ORDER BY due_on ASC NULLS LAST, id"
        );
        sqlx::query_as::<_, Liability>(&query).fetch_all(pool).await
    }

    /// Update a liability. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLiability,
    ) -> Result<Option<Liability>, sqlx::Error> {
        let query = format!(
            "UPDATE liabilities SET
                name = COALESCE($2, name),
                lender = COALESCE($3, lender),
                amount_cents = COALESCE($4, amount_cents),
                currency = COALESCE($5, currency),
                due_on = COALESCE($6, due_on),
                notes = COALESCE($7, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {LIABILITY_COLUMNS}"
        );
        sqlx::query_as::<_, Liability>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.lender)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .bind(input.due_on)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a liability by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM liabilities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Salaries
// ---------------------------------------------------------------------------

const SALARY_COLUMNS: &str =
    "id, employee_id, amount_cents, currency, effective_from, notes, created_at, updated_at";

/// Provides CRUD operations for salary records.
pub struct SalaryRepo;

impl SalaryRepo {
    /// Insert a new salary record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSalary) -> Result<Salary, sqlx::Error> {
        let query = format!(
            "INSERT INTO salaries (employee_id, amount_cents, currency, effective_from, notes) \
             VALUES ($1, $2, COALESCE($3, 'USD'), $4, $5) \
             RETURNING {SALARY_COLUMNS}"
        );
        sqlx::query_as::<_, Salary>(&query)
            .bind(input.employee_id)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .bind(input.effective_from)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a salary record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Salary>, sqlx::Error> {
        let query = format!("SELECT {SALARY_COLUMNS} FROM salaries WHERE id = $1");
        sqlx::query_as::<_, Salary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the salary history of an employee, most recent first.
    pub async fn list_for_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<Salary>, sqlx::Error> {
        let query = format!(
            "SELECT {SALARY_COLUMNS} FROM salaries WHERE employee_id = $1 \
             ORDER BY effective_from DESC, id"
        );
        sqlx::query_as::<_, Salary>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// Update a salary record. Only non-`None` fields in `input` are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSalary,
    ) -> Result<Option<Salary>, sqlx::Error> {
        let query = format!(
            "UPDATE salaries SET
                amount_cents = COALESCE($2, amount_cents),
                currency = COALESCE($3, currency),
                effective_from = COALESCE($4, effective_from),
                notes = COALESCE($5, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {SALARY_COLUMNS}"
        );
        sqlx::query_as::<_, Salary>(&query)
            .bind(id)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .bind(input.effective_from)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a salary record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM salaries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Dividends
// ---------------------------------------------------------------------------

const DIVIDEND_COLUMNS: &str =
    "id, source, amount_cents, currency, paid_on, notes, created_at";

/// Provides CRUD operations for dividend records.
pub struct DividendRepo;

impl DividendRepo {
    /// Insert a new dividend record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDividend) -> Result<Dividend, sqlx::Error> {
        let query = format!(
            "INSERT INTO dividends (source, amount_cents, currency, paid_on, notes) \
             VALUES ($1, $2, COALESCE($3, 'USD'), $4, $5) \
             RETURNING {DIVIDEND_COLUMNS}"
        );
        sqlx::query_as::<_, Dividend>(&query)
            .bind(&input.source)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .bind(input.paid_on)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List all dividend records, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Dividend>, sqlx::Error> {
        let query = format!("SELECT {DIVIDEND_COLUMNS} FROM dividends ORDER BY paid_on DESC, id");
        sqlx::query_as::<_, Dividend>(&query).fetch_all(pool).await
    }

    /// Delete a dividend record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dividends WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Monthly payments
// ---------------------------------------------------------------------------

const MONTHLY_PAYMENT_COLUMNS: &str =
    "id, payee, amount_cents, currency, day_of_month, active, notes, created_at, updated_at";

/// Provides CRUD operations for recurring monthly payments.
pub struct MonthlyPaymentRepo;

impl MonthlyPaymentRepo {
    /// Insert a new recurring payment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMonthlyPayment,
    ) -> Result<MonthlyPayment, sqlx::Error> {
        let query = format!(
            "INSERT INTO monthly_payments \
                (payee, amount_cents, currency, day_of_month, active, notes) \
             VALUES ($1, $2, COALESCE($3, 'USD'), $4, COALESCE($5, TRUE), $6) \
             RETURNING {MONTHLY_PAYMENT_COLUMNS}"
        );
        sqlx::query_as::<_, MonthlyPayment>(&query)
            .bind(&input.payee)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .bind(input.day_of_month)
            .bind(input.active)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a recurring payment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MonthlyPayment>, sqlx::Error> {
        let query = format!("SELECT {MONTHLY_PAYMENT_COLUMNS} FROM monthly_payments WHERE id = $1");
        sqlx::query_as::<_, MonthlyPayment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all recurring payments by payment day.
    pub async fn list(pool: &PgPool) -> Result<Vec<MonthlyPayment>, sqlx::Error> {
        let query = format!(
            "SELECT {MONTHLY_PAYMENT_COLUMNS} FROM monthly_payments ORDER BY day_of_month, id"
        );
        sqlx::query_as::<_, MonthlyPayment>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a recurring payment. Only non-`None` fields in `input` are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMonthlyPayment,
    ) -> Result<Option<MonthlyPayment>, sqlx::Error> {
        let query = format!(
            "UPDATE monthly_payments SET
                payee = COALESCE($2, payee),
                amount_cents = COALESCE($3, amount_cents),
                currency = COALESCE($4, currency),
                day_of_month = COALESCE($5, day_of_month),
                active = COALESCE($6, active),
                notes = COALESCE($7, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {MONTHLY_PAYMENT_COLUMNS}"
        );
        sqlx::query_as::<_, MonthlyPayment>(&query)
            .bind(id)
            .bind(&input.payee)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .bind(input.day_of_month)
            .bind(input.active)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a recurring payment by ID. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM monthly_payments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
