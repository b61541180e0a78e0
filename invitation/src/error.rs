//! Error types used by the crate.

use crate::flow::Stage;
use thiserror::Error;

/// Failure to obtain the guest's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The guest refused to share their location.
    #[error("Location permission is required to proceed.")]
    PermissionDenied,
    /// There is no way to get a location in this environment.
    #[error("Geolocation is not supported by this environment.")]
    Unsupported,
}

/// Invitation error type.
#[derive(Debug, Error)]
pub enum InvitationError {
    /// Guest position is not available.
    #[error(transparent)]
    Location(#[from] LocationError),
    /// Name is empty or consists of whitespace only.
    #[error("name must not be empty")]
    EmptyName,
    /// Operation is not allowed at the current stage of the invitation.
    #[error("unexpected stage: expected {expected:?}, found {actual:?}")]
    UnexpectedStage {
        /// Stage the operation requires.
        expected: Stage,
        /// Stage the invitation is at.
        actual: Stage,
    },
    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// Error reading the configuration file or the guest name.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}
