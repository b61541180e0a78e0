//! Stages the guest goes through before seeing the card.

use crate::card::InvitationCard;
use crate::config::InvitationConfig;
use crate::error::InvitationError;
use crate::location::LocationProvider;
use crate::venue::Venue;
use invitation_types::geo::distance_km;
use invitation_types::geo::impls::GeoPoint2d;

/// Stage of the invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Waiting for the guest's position.
    #[default]
    AskLocation,
    /// Position is known, waiting for the guest's name.
    AskName,
    /// Card can be shown.
    Invite,
}

/// State of the invitation for a single guest.
///
/// The stages only go forward: `AskLocation → AskName → Invite`. A failed location request leaves the flow where
/// it was, there is no retry or fallback position.
#[derive(Debug, Clone, Default)]
pub struct InvitationFlow {
    stage: Stage,
    location: Option<GeoPoint2d>,
    name: String,
}

impl InvitationFlow {
    /// Creates a new flow at the [`Stage::AskLocation`] stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Position of the guest, if it was already received.
    pub fn location(&self) -> Option<GeoPoint2d> {
        self.location
    }

    /// Name entered by the guest. Empty until the name is submitted.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requests the guest's position from the `provider` and moves to [`Stage::AskName`] on success.
    pub async fn locate<P>(&mut self, provider: &P) -> Result<GeoPoint2d, InvitationError>
    where
        P: LocationProvider + ?Sized,
    {
        self.expect_stage(Stage::AskLocation)?;

        match provider.current_position().await {
            Ok(position) => {
                log::debug!("Guest position received: {position:?}");
                self.location = Some(position);
                self.stage = Stage::AskName;
                Ok(position)
            }
            Err(err) => {
                log::warn!("Failed to get guest position: {err}");
                Err(err.into())
            }
        }
    }

    /// Stores the guest's name and moves to [`Stage::Invite`]. A blank name is rejected and the stage stays the same.
    pub fn submit_name(&mut self, name: &str) -> Result<(), InvitationError> {
        self.expect_stage(Stage::AskName)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(InvitationError::EmptyName);
        }

        log::debug!("Guest introduced themselves as {name}");
        self.name = name.to_string();
        self.stage = Stage::Invite;

        Ok(())
    }

    /// Distance from the guest to the `venue` in kilometres. `None` if the guest's position is not known yet.
    pub fn distance_to(&self, venue: &Venue) -> Option<f64> {
        let distance = distance_km(&self.location?, &venue.coordinates);
        log::debug!("Distance to {}: {distance} km", venue.name);

        Some(distance)
    }

    /// Builds the invitation card. Only available at the [`Stage::Invite`] stage.
    pub fn invitation(&self, config: &InvitationConfig) -> Result<InvitationCard, InvitationError> {
        self.expect_stage(Stage::Invite)?;

        Ok(InvitationCard::new(
            config,
            &self.name,
            self.distance_to(&config.venue),
        ))
    }

    fn expect_stage(&self, expected: Stage) -> Result<(), InvitationError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(InvitationError::UnexpectedStage {
                expected,
                actual: self.stage,
            })
        }
    }
}
