use crate::error::InvitationTypesError;
use crate::geo::point::{GeoPoint, NewGeoPoint};
use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

/// 2d point on the surface of a celestial body.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Latitude range in degrees.
    pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);
    /// Longitude range in degrees.
    pub const LON_RANGE: (f64, f64) = (-180.0, 180.0);

    /// Creates a new point from another one.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat: other.lat(),
            lon: other.lon(),
        }
    }

    /// Creates a point, checking that both coordinates are finite and lie in the valid degree ranges.
    ///
    /// Use [`NewGeoPoint::latlon`] to construct a point without any checks.
    pub fn try_latlon(lat: f64, lon: f64) -> Result<Self, InvitationTypesError> {
        check_axis("latitude", lat, Self::LAT_RANGE)?;
        check_axis("longitude", lon, Self::LON_RANGE)?;

        Ok(Self { lat, lon })
    }

    /// Returns true if both coordinates are finite and inside the valid degree ranges.
    pub fn is_valid(&self) -> bool {
        Self::try_latlon(self.lat, self.lon).is_ok()
    }
}

fn check_axis(
    axis: &'static str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), InvitationTypesError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(InvitationTypesError::InvalidCoordinate {
            axis,
            value,
            min,
            max,
        })
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

impl RelativeEq for GeoPoint2d {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.lat.relative_eq(&other.lat, epsilon, max_relative)
            && self.lon.relative_eq(&other.lon, epsilon, max_relative)
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use invitation_types::geo::GeoPoint;
/// use invitation_types::latlon;
///
/// let point = latlon!(15.2348, 79.9922);
/// assert_eq!(point.lat(), 15.2348);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <::invitation_types::geo::impls::GeoPoint2d as ::invitation_types::geo::NewGeoPoint<f64>>::latlon(
            $lat, $lon,
        )
    };
}
