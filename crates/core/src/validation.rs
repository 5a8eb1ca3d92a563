//! Bridge between `validator` rules on request types and [`CoreError`].

use validator::Validate;

use crate::error::CoreError;

/// Run the `validator` rules declared on `input`.
///
/// Messages of all failing fields are de-duplicated, sorted and joined with
/// `"; "` into a single [`CoreError::Validation`]. Rules without a message
/// fall back to their error code.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let mut messages: Vec<String> = errors
        .field_errors()
        .into_values()
        .flatten()
        .map(|e| match &e.message {
            Some(msg) => msg.to_string(),
            None => e.code.to_string(),
        })
        .collect();
    messages.sort();
    messages.dedup();

    Err(CoreError::Validation(messages.join("; ")))
}
