//! Error type shared by every domain operation.

use thiserror::Error;

/// Errors raised by the dashboard's domain operations.
///
/// None of these are fatal for the page: the frontend logs them and keeps
/// rendering. Only [`AdminError::NoFilesSelected`] is ever shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// No user with this id is present in the directory.
    #[error("user {id} not found")]
    UserNotFound {
        /// The id that was looked up.
        id: u32,
    },

    /// Seeding would put two users with the same id into the directory.
    #[error("duplicate user id {id}")]
    DuplicateUser {
        /// The id that appeared twice.
        id: u32,
    },

    /// An upload was confirmed before any file was chosen.
    #[error("Select files first.")]
    NoFilesSelected,

    /// The upload flow received an event its current state does not accept.
    #[error("cannot {action} while upload is {from}")]
    InvalidTransition {
        /// Name of the state the flow was in.
        from: &'static str,
        /// Name of the rejected event.
        action: &'static str,
    },

    /// Dashboard configuration could not be parsed.
    #[error("invalid dashboard config: {0}")]
    Config(String),
}

/// Result alias used throughout the shared crate.
pub type Result<T> = std::result::Result<T, AdminError>;
