//! Repository for the `links` table.

use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::link::{CreateLink, Link};

const COLUMNS: &str = "id, link_type, url, profile_id";

/// Provides create/list/delete operations for profile links.
pub struct LinkRepo;

impl LinkRepo {
    /// Insert a link owned by `profile_id`, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        profile_id: DbId,
        input: &CreateLink,
    ) -> Result<Link, sqlx::Error> {
        let query = format!(
            "INSERT INTO links (link_type, url, profile_id)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Link>(&query)
            .bind(&input.link_type)
            .bind(&input.url)
            .bind(profile_id)
            .fetch_one(pool)
            .await
    }

    /// List a profile's links in insertion order.
    pub async fn list_for_profile(
        pool: &SqlitePool,
        profile_id: DbId,
    ) -> Result<Vec<Link>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM links WHERE profile_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Link>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a link by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM links WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
