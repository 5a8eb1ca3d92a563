use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// No profile row exists yet.
    #[error("No profile found")]
    NoProfile,

    #[error("{0}")]
    Validation(String),
}
