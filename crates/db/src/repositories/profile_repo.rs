//! Repository for the `profiles` table.

use chrono::Utc;
use folio_core::profile::PROFILE_ID;
use sqlx::SqlitePool;

use crate::models::profile::{CreateProfile, Profile, ProfileDetail, UpdateProfile, UpsertOutcome};
use crate::repositories::{LinkRepo, ProjectRepo, SkillRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, education, created_at, updated_at";

/// Provides access to the single profile row.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Fetch the profile, if one has been created.
    pub async fn find(pool: &SqlitePool) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = ?1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(PROFILE_ID)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the profile with its skills, projects and links.
    pub async fn find_detail(pool: &SqlitePool) -> Result<Option<ProfileDetail>, sqlx::Error> {
        let Some(profile) = Self::find(pool).await? else {
            return Ok(None);
        };

        let skills = SkillRepo::list_for_profile(pool, profile.id).await?;
        let projects = ProjectRepo::list_for_profile(pool, profile.id).await?;
        let links = LinkRepo::list_for_profile(pool, profile.id).await?;

        Ok(Some(ProfileDetail {
            profile,
            skills,
            projects,
            links,
        }))
    }

    /// Create the profile, or overwrite every mutable field of the existing one.
    ///
    /// Runs in a single transaction: the keyed row is updated first and only
    /// inserted when the update touched nothing. An omitted `education` is
    /// written as an empty string and an explicit `null` as NULL. Any error rolls the
    /// transaction back, leaving the previous row untouched.
    pub async fn upsert(
        pool: &SqlitePool,
        input: &CreateProfile,
    ) -> Result<(Profile, UpsertOutcome), sqlx::Error> {
        let now = Utc::now();
        let education = match &input.education {
            None => Some(""),
            Some(value) => value.as_deref(),
        };

        let mut tx = pool.begin().await?;

        let update = format!(
            "UPDATE profiles SET
                name = ?2,
                email = ?3,
                education = ?4,
                updated_at = ?5
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Profile>(&update)
            .bind(PROFILE_ID)
            .bind(&input.name)
            .bind(&input.email)
            .bind(education)
            .bind(now)
            .fetch_optional(&mut *tx)
            .await?;

        let result = match updated {
            Some(profile) => (profile, UpsertOutcome::Updated),
            None => {
                let insert = format!(
                    "INSERT INTO profiles (id, name, email, education, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?5)
                     RETURNING {COLUMNS}"
                );
                let profile = sqlx::query_as::<_, Profile>(&insert)
                    .bind(PROFILE_ID)
                    .bind(&input.name)
                    .bind(&input.email)
                    .bind(education)
                    .bind(now)
                    .fetch_one(&mut *tx)
                    .await?;
                (profile, UpsertOutcome::Created)
            }
        };

        tx.commit().await?;
        tracing::debug!(outcome = ?result.1, "Profile upserted");
        Ok(result)
    }

    /// Partially update the profile. Only non-`None` fields in `input` are applied.
    ///
    /// `education` is set whenever the outer `Option` is `Some`, so
    /// `Some(None)` clears it. Returns `None` if no profile exists.
    pub async fn update(
        pool: &SqlitePool,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                name = COALESCE(?2, name),
                email = COALESCE(?3, email),
                education = CASE WHEN ?4 THEN ?5 ELSE education END,
                updated_at = ?6
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let education_provided = input.education.is_some();
        let education = input.education.as_ref().and_then(|v| v.as_deref());

        sqlx::query_as::<_, Profile>(&query)
            .bind(PROFILE_ID)
            .bind(&input.name)
            .bind(&input.email)
            .bind(education_provided)
            .bind(education)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }
}
