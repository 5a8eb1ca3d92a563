//! Shared response bodies for API handlers.

use serde::Serialize;

/// A `{ "message": ... }` body, used for confirmations such as deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
