//! Texts and settings of the invitation.

use crate::color::Color;
use crate::error::InvitationError;
use crate::hearts::HeartField;
use crate::venue::{TravelLink, Venue};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything shown on the invitation card.
///
/// Every field is optional in the JSON representation. Missing fields take the values of the default invitation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvitationConfig {
    /// Card title.
    pub title: String,
    /// Quote under the title.
    pub quote: String,
    /// Names of the couple.
    pub couple: String,
    /// Date of the celebration.
    pub date: String,
    /// Time of the celebration.
    pub timing: String,
    /// Place of the celebration.
    pub venue: Venue,
    /// Booking links shown under the venue details.
    pub travel_links: Vec<TravelLink>,
    /// Background track played with the card.
    pub background_music: Option<String>,
    /// Decorative hearts.
    pub hearts: HeartsConfig,
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            title: "Engagement Invitation".into(),
            quote: "Two souls, one heart. Forever begins on Sep 28th.".into(),
            couple: "Shariq weds Sabiha".into(),
            date: "Sep 28th, 2025".into(),
            timing: "10 AM onwards".into(),
            venue: Venue::default(),
            travel_links: TravelLink::defaults(),
            background_music: Some("/music/BG.mp3".into()),
            hearts: HeartsConfig::default(),
        }
    }
}

impl InvitationConfig {
    /// Parses the configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, InvitationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InvitationError> {
        let path = path.as_ref();
        log::debug!("Loading invitation configuration from {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Settings of the floating hearts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartsConfig {
    /// Number of hearts on the screen.
    pub count: usize,
    /// Colors the hearts are painted with, in order.
    pub palette: Vec<Color>,
}

impl Default for HeartsConfig {
    fn default() -> Self {
        Self {
            count: HeartField::DEFAULT_COUNT,
            palette: Color::HEART_PALETTE.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn empty_json_gives_default_invitation() {
        let config = InvitationConfig::from_json_str("{}").unwrap();
        assert_eq!(config, InvitationConfig::default());
        assert_eq!(config.hearts.count, 12);
        assert_eq!(config.hearts.palette.len(), 6);
        assert_eq!(config.travel_links.len(), 2);
    }

    #[test]
    fn overrides() {
        let config = InvitationConfig::from_json_str(
            r##"{
                "couple": "Ravi weds Anjali",
                "venue": { "name": "Beach Resort", "coordinates": { "lat": 17.7, "lon": 83.3 } },
                "travel_links": [],
                "background_music": null,
                "hearts": { "palette": ["#ff0000"] }
            }"##,
        )
        .unwrap();

        assert_eq!(config.couple, "Ravi weds Anjali");
        assert_eq!(config.title, "Engagement Invitation");
        assert_eq!(config.venue.name, "Beach Resort");
        assert_eq!(config.venue.address, Venue::default().address);
        assert!(config.travel_links.is_empty());
        assert_eq!(config.background_music, None);
        assert_eq!(config.hearts.palette, vec![Color::rgba(255, 0, 0, 255)]);
        assert_eq!(config.hearts.count, 12);
    }

    #[test]
    fn malformed_json() {
        assert_matches!(
            InvitationConfig::from_json_str("{ \"title\": 5 }"),
            Err(InvitationError::Config(_))
        );
        assert_matches!(
            InvitationConfig::from_json_str("not json"),
            Err(InvitationError::Config(_))
        );
    }

    #[test]
    fn missing_file() {
        assert_matches!(
            InvitationConfig::from_path("/definitely/not/here/invitation.json"),
            Err(InvitationError::Io(_))
        );
    }
}
