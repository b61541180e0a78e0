//! Sources of the guest's position.

use crate::error::LocationError;
use async_trait::async_trait;
use invitation_types::geo::impls::GeoPoint2d;

/// Service that asks the platform where the guest currently is.
///
/// The request may take time (the guest has to grant the permission first) and may be refused.
#[async_trait]
pub trait LocationProvider {
    /// Returns the current position of the guest.
    async fn current_position(&self) -> Result<GeoPoint2d, LocationError>;
}

/// Provider that always returns the same position, e.g. given on the command line.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub GeoPoint2d);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<GeoPoint2d, LocationError> {
        Ok(self.0)
    }
}

/// Provider for a guest who refused to share their position.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

#[async_trait]
impl LocationProvider for DeniedLocation {
    async fn current_position(&self) -> Result<GeoPoint2d, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

/// Provider for an environment without any geolocation support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

#[async_trait]
impl LocationProvider for NoLocation {
    async fn current_position(&self) -> Result<GeoPoint2d, LocationError> {
        Err(LocationError::Unsupported)
    }
}
