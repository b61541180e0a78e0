//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, PartialEq)]
pub enum InvitationTypesError {
    /// Coordinate value is not finite or lies outside of the valid degree range.
    #[error("invalid {axis}: {value} is outside of [{min}, {max}]")]
    InvalidCoordinate {
        /// Name of the offending axis (`latitude` or `longitude`).
        axis: &'static str,
        /// Rejected value in degrees.
        value: f64,
        /// Lower bound of the axis.
        min: f64,
        /// Upper bound of the axis.
        max: f64,
    },
}
