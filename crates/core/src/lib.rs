//! Domain types shared by the Folio crates.
//!
//! Has no internal dependencies so both the repository layer and the HTTP
//! layer can use it.

pub mod error;
pub mod profile;
pub mod search;
pub mod types;
pub mod validation;
