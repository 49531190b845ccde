use super::classes::{DisplayText, GeoLocation, Image, StatusSchedule};
use super::connector::Connector;
use super::enums::{Capability, ParkingRestriction, Status};
use crate::domain::id_generation::IdentifierGenerator;
use crate::domain::identifiers::{CountryCode, PartyId, TypeId};
use crate::domain::token_source::UniqueTokenSource;
use crate::infrastructure::log_messages::location as log;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The part of a Location that powers a single EV in a single session.
///
/// Directional fields only describe how to get from the Location to the
/// EVSE; an EVSE that needs more than that belongs in its own Location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evse {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evse_id: Option<String>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_schedule: Vec<StatusSchedule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<Capability>,
    pub connectors: Vec<Connector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directions: Vec<DisplayText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parking_restrictions: Vec<ParkingRestriction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    pub last_updated: DateTime<Utc>,
}

impl Evse {
    pub fn new(uid: impl Into<String>, status: Status) -> Self {
        Self {
            uid: uid.into(),
            evse_id: None,
            status,
            status_schedule: Vec::new(),
            capabilities: Vec::new(),
            connectors: Vec::new(),
            floor_level: None,
            coordinates: None,
            physical_reference: None,
            directions: Vec::new(),
            parking_restrictions: Vec::new(),
            images: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    /// Creates an EVSE with a unique `uid` and an eMI3 `evse_id` of type `E`.
    ///
    /// Draws two tokens from the generator's source.
    pub fn register<S: UniqueTokenSource>(
        generator: &IdentifierGenerator<S>,
        country_code: &CountryCode,
        party_id: &PartyId,
        status: Status,
    ) -> Self {
        let uid = generator.generate_unique_identifier().into_inner();
        let evse_id = generator.compliant_identifier(country_code, party_id, Some(&TypeId::evse()));

        let mut evse = Self::new(uid, status);
        evse.evse_id = Some(evse_id.to_string());
        debug!(uid = %evse.uid, evse_id = %evse_id, "{}", log::EVSE_REGISTERED);
        evse
    }

    pub fn add_connector(&mut self, connector: Connector) {
        self.last_updated = self.last_updated.max(connector.last_updated);
        self.connectors.push(connector);
    }

    pub fn connector(&self, id: &str) -> Option<&Connector> {
        self.connectors.iter().find(|c| c.id == id)
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.last_updated = Utc::now();
    }

    pub fn is_available(&self) -> bool {
        self.status == Status::Available
    }
}
