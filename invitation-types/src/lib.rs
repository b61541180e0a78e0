//! Geographic value types used by the invitation card.
//!
//! The crate is built around the [`GeoPoint`](geo::GeoPoint) trait, so any type that knows its latitude and
//! longitude can be measured against another one. The main algorithm is the great-circle distance computed with the
//! haversine formula (see [`distance_km`](geo::distance_km) and [`Sphere`](geo::Sphere)).
//!
//! ```
//! use invitation_types::geo::{distance_km, GeoPoint};
//! use invitation_types::latlon;
//!
//! let kandukur = latlon!(15.2348, 79.9922);
//! let ongole = latlon!(15.5057, 80.0499);
//!
//! let km = distance_km(&kandukur, &ongole);
//! assert!((km - 30.7).abs() < 0.5);
//! assert_eq!(km, ongole.distance_km(&kandukur));
//! ```

pub mod error;
pub mod geo;

#[cfg(feature = "geo-types")]
mod geo_types;
