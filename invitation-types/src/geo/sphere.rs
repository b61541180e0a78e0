use crate::geo::distance::central_angle;
use crate::geo::point::GeoPoint;
use serde::{Deserialize, Serialize};

/// Spherical model of a celestial body used for great-circle computations.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Sphere {
    radius_km: f64,
}

impl Sphere {
    /// Earth as a sphere with the radius of 6371 km.
    pub const EARTH: Self = Sphere { radius_km: 6371.0 };

    /// Creates a sphere with the given radius in kilometres.
    pub const fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Radius of the sphere in kilometres.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Great-circle distance between two points on the surface of the sphere, in kilometres.
    ///
    /// The result is never negative for finite input. `NaN` in any of the coordinates results in `NaN`.
    pub fn distance(&self, a: &impl GeoPoint, b: &impl GeoPoint) -> f64 {
        self.radius_km * central_angle(a, b)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::EARTH
    }
}
