//! Place of the celebration and the ways to get there.

use invitation_types::geo::impls::GeoPoint2d;
use invitation_types::geo::NewGeoPoint;
use serde::{Deserialize, Serialize};

const MAPS_URL: &str = "https://www.google.com/maps";

/// Place where the celebration happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    /// Name of the hall.
    pub name: String,
    /// Postal address without the name.
    pub address: String,
    /// Approximate position used for the distance estimate.
    pub coordinates: GeoPoint2d,
}

impl Default for Venue {
    fn default() -> Self {
        Self {
            name: "SVS Function Hall".into(),
            address: "Pamuru Rd, Kandukur, Andhra Pradesh 523105".into(),
            coordinates: GeoPoint2d::latlon(15.2348, 79.9922),
        }
    }
}

impl Venue {
    /// Name and address as a single line.
    pub fn full_address(&self) -> String {
        match (self.name.is_empty(), self.address.is_empty()) {
            (true, _) => self.address.clone(),
            (false, true) => self.name.clone(),
            (false, false) => format!("{}, {}", self.name, self.address),
        }
    }

    /// Search query for the map service: words of the full address joined with `+`.
    pub fn map_query(&self) -> String {
        self.full_address()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("+")
    }

    /// Link opening the venue on the map.
    pub fn map_url(&self) -> String {
        format!("{MAPS_URL}?q={}", self.map_query())
    }

    /// Link of the embeddable map frame.
    pub fn map_embed_url(&self) -> String {
        format!("{}&output=embed", self.map_url())
    }
}

/// External link for booking the trip to the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelLink {
    /// Text shown to the guest.
    pub label: String,
    /// Booking page.
    pub url: String,
}

impl TravelLink {
    /// Creates a new link.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Train and bus booking links.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Book Train Ticket", "https://www.irctc.co.in/"),
            Self::new("Book Bus", "https://www.makemytrip.com/bus-tickets/"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_map_links() {
        let venue = Venue::default();
        assert_eq!(
            venue.full_address(),
            "SVS Function Hall, Pamuru Rd, Kandukur, Andhra Pradesh 523105"
        );
        assert_eq!(
            venue.map_url(),
            "https://www.google.com/maps?q=SVS+Function+Hall,+Pamuru+Rd,+Kandukur,+Andhra+Pradesh+523105"
        );
        assert_eq!(
            venue.map_embed_url(),
            "https://www.google.com/maps?q=SVS+Function+Hall,+Pamuru+Rd,+Kandukur,+Andhra+Pradesh+523105&output=embed"
        );
    }

    #[test]
    fn partial_address() {
        let venue = Venue {
            name: "".into(),
            address: "Main  Road".into(),
            ..Default::default()
        };
        assert_eq!(venue.full_address(), "Main  Road");
        assert_eq!(venue.map_query(), "Main+Road");

        let venue = Venue {
            address: "".into(),
            ..Default::default()
        };
        assert_eq!(venue.full_address(), "SVS Function Hall");
    }

    #[test]
    fn partial_deserialization() {
        let venue: Venue = serde_json::from_str(r#"{"name": "Town Hall"}"#).unwrap();
        assert_eq!(venue.name, "Town Hall");
        assert_eq!(venue.coordinates, Venue::default().coordinates);
    }
}
