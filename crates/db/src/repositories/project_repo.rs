//! Repository for the `projects` table.

use folio_core::search::like_pattern;
use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::project::{CreateProject, Project};

const COLUMNS: &str = "id, title, description, profile_id";

/// Provides create/list/delete/search operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a project owned by `profile_id`, returning the created row.
    ///
    /// An omitted description is stored as an empty string.
    pub async fn create(
        pool: &SqlitePool,
        profile_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, profile_id)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(profile_id)
            .fetch_one(pool)
            .await
    }

    /// List a profile's projects in insertion order.
    pub async fn list_for_profile(
        pool: &SqlitePool,
        profile_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE profile_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Project>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Projects of `profile_id` whose title contains `query`, ignoring ASCII case.
    pub async fn search(
        pool: &SqlitePool,
        profile_id: DbId,
        query: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE profile_id = ?1 AND title LIKE ?2 ESCAPE '\\'
             ORDER BY id"
        );
        sqlx::query_as::<_, Project>(&sql)
            .bind(profile_id)
            .bind(like_pattern(query))
            .fetch_all(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
