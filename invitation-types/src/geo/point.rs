use crate::geo::sphere::Sphere;
use num_traits::Float;

/// A point on the surface of a celestial body, given by latitude and longitude in decimal degrees.
///
/// Implementations do not have to keep the values in the valid range. Latitude is expected to be in `[-90, 90]` and
/// longitude in `[-180, 180]`, but nothing is clamped: it is the caller's responsibility to supply valid values.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Great-circle distance to the `other` point on the Earth sphere, in kilometres.
    fn distance_km(&self, other: &impl GeoPoint) -> f64
    where
        Self: Sized,
    {
        Sphere::EARTH.distance(self, other)
    }
}

/// Geo point that can be constructed from its coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a point from longitude and latitude in degrees.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}
