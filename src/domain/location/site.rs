use super::classes::{
    AdditionalGeoLocation, BusinessDetails, DisplayText, EnergyMix, GeoLocation, Hours, Image,
    PublishTokenType,
};
use super::enums::{Facility, ParkingType, Status};
use super::evse::Evse;
use crate::domain::id_generation::IdentifierGenerator;
use crate::domain::identifiers::{CountryCode, PartyId};
use crate::domain::token_source::UniqueTokenSource;
use crate::infrastructure::log_messages::location as log;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mandatory address and geo details of a new Location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSite {
    pub address: String,
    pub city: String,
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-3
    pub country: String,
    pub coordinates: GeoLocation,
    /// IANA tz database name, e.g. `Europe/Oslo`
    pub time_zone: String,
}

/// A place where a group of EVSEs that belong together are installed.
///
/// Locations with `publish` unset may only be shown to holders of one of
/// the tokens in `publish_allowed_to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub country_code: CountryCode,
    pub party_id: PartyId,
    pub id: String,
    pub publish: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publish_allowed_to: Vec<PublishTokenType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub address: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country: String,
    pub coordinates: GeoLocation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_locations: Vec<AdditionalGeoLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_type: Option<ParkingType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evses: Vec<Evse>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directions: Vec<DisplayText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<BusinessDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suboperator: Option<BusinessDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<BusinessDetails>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facilities: Vec<Facility>,
    pub time_zone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_times: Option<Hours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charging_when_closed: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_mix: Option<EnergyMix>,
    pub last_updated: DateTime<Utc>,
}

impl Location {
    pub fn new(
        id: impl Into<String>,
        country_code: CountryCode,
        party_id: PartyId,
        site: LocationSite,
    ) -> Self {
        Self {
            country_code,
            party_id,
            id: id.into(),
            publish: true,
            publish_allowed_to: Vec::new(),
            name: None,
            address: site.address,
            city: site.city,
            postal_code: site.postal_code,
            state: None,
            country: site.country,
            coordinates: site.coordinates,
            related_locations: Vec::new(),
            parking_type: None,
            evses: Vec::new(),
            directions: Vec::new(),
            operator: None,
            suboperator: None,
            owner: None,
            facilities: Vec::new(),
            time_zone: site.time_zone,
            opening_times: None,
            charging_when_closed: None,
            images: Vec::new(),
            energy_mix: None,
            last_updated: Utc::now(),
        }
    }

    /// Creates a published Location keyed by an eMI3 compliant id scoped to its party
    pub fn register<S: UniqueTokenSource>(
        generator: &IdentifierGenerator<S>,
        country_code: CountryCode,
        party_id: PartyId,
        site: LocationSite,
    ) -> Self {
        let id = generator.compliant_identifier(&country_code, &party_id, None);
        let location = Self::new(id.to_string(), country_code, party_id, site);
        debug!(location_id = %location.id, "{}", log::REGISTERED);
        location
    }

    /// Attaches an EVSE; the Location's `last_updated` never falls behind its children
    ///
    /// Later EVSE changes go through [`Location::update_evse`] to keep that true.
    pub fn add_evse(&mut self, evse: Evse) {
        self.last_updated = self.last_updated.max(evse.last_updated);
        self.evses.push(evse);
    }

    pub fn evse(&self, uid: &str) -> Option<&Evse> {
        self.evses.iter().find(|e| e.uid == uid)
    }

    /// Applies `change` to one EVSE and carries its `last_updated` up to the Location
    pub fn update_evse<R>(
        &mut self,
        uid: &str,
        change: impl FnOnce(&mut Evse) -> R,
    ) -> Option<R> {
        let evse = self.evses.iter_mut().find(|e| e.uid == uid)?;
        let result = change(evse);
        self.last_updated = self.last_updated.max(evse.last_updated);
        Some(result)
    }

    /// Changes one EVSE's status; `None` when no EVSE has that uid
    pub fn set_evse_status(&mut self, uid: &str, status: Status) -> Option<()> {
        self.update_evse(uid, |evse| evse.set_status(status))
    }

    /// Hides the Location from everyone except holders of the given tokens
    pub fn restrict_to(&mut self, tokens: Vec<PublishTokenType>) {
        self.publish = false;
        self.publish_allowed_to = tokens;
        self.last_updated = Utc::now();
    }
}
