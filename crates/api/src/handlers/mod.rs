pub mod profile;
pub mod projects;
pub mod search;
pub mod skills;

use folio_core::error::CoreError;
use folio_db::models::profile::Profile;
use folio_db::repositories::ProfileRepo;
use folio_db::DbPool;

use crate::error::{AppError, AppResult};

/// Message returned when a child record is added before the profile exists.
pub const PROFILE_REQUIRED: &str = "Please create a profile first";

/// Fetch the profile or fail with 404 "No profile found".
pub(crate) async fn require_profile(pool: &DbPool) -> AppResult<Profile> {
    ProfileRepo::find(pool)
        .await?
        .ok_or(AppError::Core(CoreError::NoProfile))
}

/// Fetch the profile that will own a new record, or fail with 400.
pub(crate) async fn require_owner_profile(pool: &DbPool) -> AppResult<Profile> {
    ProfileRepo::find(pool)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Validation(PROFILE_REQUIRED.into())))
}
