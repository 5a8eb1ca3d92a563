//! Repository for the `skills` table.

use folio_core::profile::skill_level_or_default;
use folio_core::search::like_pattern;
use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::skill::{CreateSkill, Skill};

const COLUMNS: &str = "id, name, level, profile_id";

/// Provides create/list/delete/search operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a skill owned by `profile_id`, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        profile_id: DbId,
        input: &CreateSkill,
    ) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, level, profile_id)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(skill_level_or_default(input.level.as_deref()))
            .bind(profile_id)
            .fetch_one(pool)
            .await
    }

    /// List a profile's skills in insertion order.
    pub async fn list_for_profile(
        pool: &SqlitePool,
        profile_id: DbId,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE profile_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Skill>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// The first `limit` skills in insertion order. Not ranked by anything else.
    pub async fn top(
        pool: &SqlitePool,
        profile_id: DbId,
        limit: i64,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM skills WHERE profile_id = ?1 ORDER BY id LIMIT ?2");
        sqlx::query_as::<_, Skill>(&query)
            .bind(profile_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Skills of `profile_id` whose name contains `query`, ignoring ASCII case.
    pub async fn search(
        pool: &SqlitePool,
        profile_id: DbId,
        query: &str,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM skills
             WHERE profile_id = ?1 AND name LIKE ?2 ESCAPE '\\'
             ORDER BY id"
        );
        sqlx::query_as::<_, Skill>(&sql)
            .bind(profile_id)
            .bind(like_pattern(query))
            .fetch_all(pool)
            .await
    }

    /// Delete a skill by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
