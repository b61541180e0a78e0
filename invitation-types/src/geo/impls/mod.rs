//! Implementations of geo point types.

mod point;

pub use point::GeoPoint2d;
