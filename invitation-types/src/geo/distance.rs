use crate::geo::point::GeoPoint;
use crate::geo::sphere::Sphere;
use num_traits::ToPrimitive;

/// Great-circle distance between two points on the Earth sphere (radius 6371 km), in kilometres.
///
/// Computed with the haversine formula. The function is total over finite input and never fails: coordinates are not
/// validated or clamped, and `NaN` input propagates into the result.
///
/// ```
/// use invitation_types::geo::distance_km;
/// use invitation_types::latlon;
///
/// let d = distance_km(&latlon!(0.0, 0.0), &latlon!(0.0, 180.0));
/// assert!((d - 20015.1).abs() < 1.0);
/// ```
pub fn distance_km(a: &impl GeoPoint, b: &impl GeoPoint) -> f64 {
    Sphere::EARTH.distance(a, b)
}

/// Central angle between two points in radians, as given by the haversine formula.
pub fn central_angle(a: &impl GeoPoint, b: &impl GeoPoint) -> f64 {
    let (lat_a, lon_a) = degrees(a);
    let (lat_b, lon_b) = degrees(b);

    let d_lat = (lat_b - lat_a).to_radians();
    let d_lon = (lon_b - lon_a).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.to_radians().cos() * lat_b.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `h` slightly above 1 for antipodal points. `NaN` must pass through untouched.
    let h = if h > 1.0 { 1.0 } else { h };

    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

fn degrees(point: &impl GeoPoint) -> (f64, f64) {
    (
        point.lat().to_f64().unwrap_or(f64::NAN),
        point.lon().to_f64().unwrap_or(f64::NAN),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::impls::GeoPoint2d;
    use crate::geo::NewGeoPoint;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ::geo::HaversineDistance;

    const VENUE: (f64, f64) = (15.2348, 79.9922);

    fn sample_points() -> Vec<GeoPoint2d> {
        let mut points = vec![];
        for lat in [-89.5, -60.0, -23.4, 0.0, 15.2348, 45.0, 89.9] {
            for lon in [-179.9, -120.0, -0.5, 0.0, 79.9922, 135.0, 180.0] {
                points.push(GeoPoint2d::latlon(lat, lon));
            }
        }

        points
    }

    #[test]
    fn distance_to_itself_is_zero() {
        for p in sample_points() {
            assert_eq!(distance_km(&p, &p), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let points = sample_points();
        for a in &points {
            for b in &points {
                assert_eq!(distance_km(a, b), distance_km(b, a));
            }
        }
    }

    #[test]
    fn distance_is_never_negative() {
        let points = sample_points();
        for a in &points {
            for b in &points {
                assert!(distance_km(a, b) >= 0.0);
            }
        }
    }

    #[test]
    fn one_degree_of_latitude_at_equator() {
        let d = distance_km(&GeoPoint2d::latlon(0.0, 0.0), &GeoPoint2d::latlon(1.0, 0.0));
        assert_abs_diff_eq!(d, 111.19, epsilon = 0.5);
    }

    #[test]
    fn half_of_equator() {
        let d = distance_km(&GeoPoint2d::latlon(0.0, 0.0), &GeoPoint2d::latlon(0.0, 180.0));
        assert_abs_diff_eq!(d, 20015.1, epsilon = 1.0);
        assert_abs_diff_eq!(d, std::f64::consts::PI * 6371.0, epsilon = 1e-9);
    }

    #[test]
    fn pole_to_pole() {
        let d = distance_km(&GeoPoint2d::latlon(90.0, 0.0), &GeoPoint2d::latlon(-90.0, 0.0));
        assert!(d.is_finite());
        assert_abs_diff_eq!(d, 20015.1, epsilon = 1.0);
    }

    #[test]
    fn triangle_inequality() {
        let points = sample_points();
        for a in points.iter().step_by(3) {
            for b in points.iter().step_by(5) {
                for c in points.iter().step_by(7) {
                    assert!(
                        distance_km(a, c) <= distance_km(a, b) + distance_km(b, c) + 1e-6,
                        "{a:?} {b:?} {c:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn nan_propagates() {
        let a = GeoPoint2d::latlon(f64::NAN, 0.0);
        let b = GeoPoint2d::latlon(10.0, 10.0);
        assert!(distance_km(&a, &b).is_nan());
        assert!(distance_km(&b, &GeoPoint2d::latlon(0.0, f64::NAN)).is_nan());
    }

    #[test]
    fn out_of_range_values_are_not_clamped() {
        let a = GeoPoint2d::latlon(0.0, 0.0);
        let wrapped = GeoPoint2d::latlon(0.0, 370.0);
        assert_abs_diff_eq!(
            distance_km(&a, &wrapped),
            distance_km(&a, &GeoPoint2d::latlon(0.0, 10.0)),
            epsilon = 1e-9
        );
    }

    #[test]
    fn matches_geo_crate() {
        // `geo` measures on the mean Earth radius of 6371008.8 m.
        let scale = 6_371_008.8 / 6_371_000.0;
        let venue = GeoPoint2d::latlon(VENUE.0, VENUE.1);
        let others = [
            GeoPoint2d::latlon(17.385, 78.4867),
            GeoPoint2d::latlon(51.5074, -0.1278),
            GeoPoint2d::latlon(-33.8688, 151.2093),
            GeoPoint2d::latlon(40.7128, -74.006),
        ];

        for other in others {
            let expected = ::geo::Point::new(VENUE.1, VENUE.0)
                .haversine_distance(&::geo::Point::new(other.lon(), other.lat()));
            assert_relative_eq!(
                distance_km(&venue, &other) * 1000.0 * scale,
                expected,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    #[cfg(feature = "geo-types")]
    fn f32_points() {
        let a = geo_types::Point::<f32>::new(0.0, 0.0);
        let b = geo_types::Point::<f32>::new(0.0, 1.0);
        assert_abs_diff_eq!(distance_km(&a, &b), 111.19, epsilon = 0.5);
    }

    #[test]
    fn custom_sphere() {
        let unit = Sphere::new(1.0);
        let d = unit.distance(&GeoPoint2d::latlon(0.0, 0.0), &GeoPoint2d::latlon(0.0, 90.0));
        assert_abs_diff_eq!(d, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(
            central_angle(&GeoPoint2d::latlon(0.0, 0.0), &GeoPoint2d::latlon(0.0, 90.0)),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
    }
}
