//! Points in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and the great-circle distance between
//! them (see [`distance_km`] and [`Sphere`]).

mod distance;
pub mod impls;
mod point;
mod sphere;

pub use distance::{central_angle, distance_km};
pub use point::{GeoPoint, NewGeoPoint};
pub use sphere::Sphere;
