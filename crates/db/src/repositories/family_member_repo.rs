//! Repository for the `family_members` table.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::family_member::{CreateFamilyMember, FamilyMember, UpdateFamilyMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, employer_id, full_name, relation, date_of_birth, notes, created_at, updated_at";

/// Provides CRUD operations for household family members.
pub struct FamilyMemberRepo;

impl FamilyMemberRepo {
    /// Add a family member to a household.
    pub async fn create(
        pool: &PgPool,
        employer_id: DbId,
        input: &CreateFamilyMember,
    ) -> Result<FamilyMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO family_members (employer_id, full_name, relation, date_of_birth, notes) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FamilyMember>(&query)
            .bind(employer_id)
            .bind(&input.full_name)
            .bind(&input.relation)
            .bind(input.date_of_birth)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a family member by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FamilyMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM family_members WHERE id = $1");
        sqlx::query_as::<_, FamilyMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the family members of a household.
    pub async fn list_for_employer(
        pool: &PgPool,
        employer_id: DbId,
    ) -> Result<Vec<FamilyMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM family_members WHERE employer_id = $1 ORDER BY full_name, id"
        );
        sqlx::query_as::<_, FamilyMember>(&query)
            .bind(employer_id)
            .fetch_all(pool)
            .await
    }

    /// Update a family member. Only non-`None` fields in `input` are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFamilyMember,
    ) -> Result<Option<FamilyMember>, sqlx::Error> {
        let query = format!(
            "UPDATE family_members SET
                full_name = COALESCE($2, full_name),
                relation = COALESCE($3, relation),
                date_of_birth = COALESCE($4, date_of_birth),
                notes = COALESCE($5, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FamilyMember>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.relation)
            .bind(input.date_of_birth)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a family member by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM family_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
