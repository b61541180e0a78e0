//! Engagement invitation shown in a terminal.
//!
//! The invitation goes through three stages (see [`flow::InvitationFlow`]): first the guest's position is requested
//! from a [`location::LocationProvider`], then the guest enters their name, and finally an
//! [`card::InvitationCard`] is rendered with the venue details, travel links, a map link and the distance between
//! the guest and the venue. The distance itself is computed by [`invitation_types::geo::distance_km`].
//!
//! Cosmetic floating hearts are described by [`hearts::HeartField`], a seedable set of sprites that can be sampled
//! at any moment of their (infinite) animation.

pub mod card;
pub mod color;
pub mod config;
pub mod error;
pub mod flow;
pub mod hearts;
pub mod location;
pub mod venue;

pub use card::{DistanceLabel, InvitationCard};
pub use color::Color;
pub use config::InvitationConfig;
pub use error::{InvitationError, LocationError};
pub use flow::{InvitationFlow, Stage};
pub use invitation_types;
