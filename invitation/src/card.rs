//! Text rendering of the invitation card.

use crate::config::InvitationConfig;
use crate::venue::TravelLink;
use std::fmt::{Display, Formatter};

/// Name used when the guest did not introduce themselves.
pub const GUEST_FALLBACK: &str = "Guest";

/// Distance between the guest and the venue, displayed with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DistanceLabel(pub f64);

impl DistanceLabel {
    /// Distance in kilometres.
    pub fn km(&self) -> f64 {
        self.0
    }
}

impl Display for DistanceLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} km", self.0)
    }
}

/// Invitation prepared for a specific guest.
#[derive(Debug, Clone, PartialEq)]
pub struct InvitationCard {
    guest: String,
    distance: Option<DistanceLabel>,
    title: String,
    quote: String,
    couple: String,
    venue: String,
    date: String,
    timing: String,
    travel_links: Vec<TravelLink>,
    map_url: String,
    background_music: Option<String>,
}

impl InvitationCard {
    /// Creates a card from the invitation config. Blank `guest` is replaced with [`GUEST_FALLBACK`].
    pub fn new(config: &InvitationConfig, guest: &str, distance_km: Option<f64>) -> Self {
        let guest = match guest.trim() {
            "" => GUEST_FALLBACK.to_string(),
            name => name.to_string(),
        };

        Self {
            guest,
            distance: distance_km.map(DistanceLabel),
            title: config.title.clone(),
            quote: config.quote.clone(),
            couple: config.couple.clone(),
            venue: config.venue.full_address(),
            date: config.date.clone(),
            timing: config.timing.clone(),
            travel_links: config.travel_links.clone(),
            map_url: config.venue.map_url(),
            background_music: config.background_music.clone(),
        }
    }

    /// Name the card is addressed to.
    pub fn guest(&self) -> &str {
        &self.guest
    }

    /// Distance to the venue, if the guest's position is known.
    pub fn distance(&self) -> Option<DistanceLabel> {
        self.distance
    }

    /// Greeting line of the card.
    pub fn greeting(&self) -> String {
        format!(
            "Hey {}, you’re lovingly invited to celebrate this day of joy with us.",
            self.guest
        )
    }
}

impl Display for InvitationCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "“{}”", self.quote)?;
        writeln!(f)?;
        writeln!(f, "{}", self.couple)?;
        writeln!(f)?;
        writeln!(f, "{}", self.greeting())?;
        writeln!(f)?;
        writeln!(f, "Venue: {}", self.venue)?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Timing: {}", self.timing)?;

        if let Some(distance) = self.distance {
            writeln!(f)?;
            writeln!(f, "You are approximately {distance} away from the venue.")?;
            writeln!(f, "Start planning your travel!")?;
        }

        writeln!(f)?;
        for link in &self.travel_links {
            writeln!(f, "{}: {}", link.label, link.url)?;
        }
        write!(f, "Map: {}", self.map_url)?;

        if let Some(music) = &self.background_music {
            writeln!(f)?;
            write!(f, "♪ {music}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_label_rounding() {
        assert_eq!(DistanceLabel(30.7467).to_string(), "30.7 km");
        assert_eq!(DistanceLabel(0.0).to_string(), "0.0 km");
        assert_eq!(DistanceLabel(1234.56).to_string(), "1234.6 km");
        assert_eq!(DistanceLabel(20015.086796).to_string(), "20015.1 km");
    }

    #[test]
    fn guest_fallback() {
        let config = InvitationConfig::default();
        assert_eq!(InvitationCard::new(&config, "", None).guest(), "Guest");
        assert_eq!(InvitationCard::new(&config, "   ", None).guest(), "Guest");
        assert_eq!(InvitationCard::new(&config, " Asha ", None).guest(), "Asha");
    }

    #[test]
    fn card_with_distance() {
        let card = InvitationCard::new(&InvitationConfig::default(), "Asha", Some(30.7467));
        let text = card.to_string();

        assert!(text.starts_with("Engagement Invitation\n"));
        assert!(text.contains("“Two souls, one heart. Forever begins on Sep 28th.”"));
        assert!(text.contains("Shariq weds Sabiha"));
        assert!(text.contains(
            "Hey Asha, you’re lovingly invited to celebrate this day of joy with us."
        ));
        assert!(text.contains(
            "Venue: SVS Function Hall, Pamuru Rd, Kandukur, Andhra Pradesh 523105\n"
        ));
        assert!(text.contains("Date: Sep 28th, 2025\nTiming: 10 AM onwards\n"));
        assert!(text.contains("You are approximately 30.7 km away from the venue.\n"));
        assert!(text.contains("Start planning your travel!"));
        assert!(text.contains("Book Train Ticket: https://www.irctc.co.in/\n"));
        assert!(text.contains("Book Bus: https://www.makemytrip.com/bus-tickets/\n"));
        assert!(text.contains("Map: https://www.google.com/maps?q=SVS+Function+Hall,"));
        assert!(text.ends_with("♪ /music/BG.mp3"));
    }

    #[test]
    fn card_without_distance() {
        let config = InvitationConfig {
            background_music: None,
            ..Default::default()
        };
        let text = InvitationCard::new(&config, "Asha", None).to_string();

        assert!(!text.contains("approximately"));
        assert!(!text.contains("Start planning"));
        assert!(text.ends_with(&format!("Map: {}", config.venue.map_url())));
    }
}
