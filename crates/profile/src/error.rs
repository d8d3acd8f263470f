//! Error types produced by the profile crate.
//!
//! Reads against the static store only fail when the backing data cannot be
//! produced; callers such as the HTTP layer turn these into a generic
//! "failed to fetch" response without retrying.

use thiserror::Error;

/// Errors surfaced by [`Storage`](crate::Storage) implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DataError {
    /// The photo list could not be read.
    #[error("photo list unavailable: {0}")]
    PhotosUnavailable(String),

    /// The profile record could not be read.
    #[error("profile unavailable: {0}")]
    ProfileUnavailable(String),

    /// A user with this username already exists.
    #[error("username already taken: {0}")]
    DuplicateUsername(String),
}

impl DataError {
    /// Returns true when the failure happened while reading seeded data.
    pub fn is_read_failure(&self) -> bool {
        matches!(
            self,
            DataError::PhotosUnavailable(_) | DataError::ProfileUnavailable(_)
        )
    }
}
