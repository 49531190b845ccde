use super::enums::{ConnectorFormat, ConnectorType, PowerType};
use crate::domain::id_generation::IdentifierGenerator;
use crate::domain::token_source::UniqueTokenSource;
use crate::infrastructure::log_messages::location as log;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Electrical and physical description of a new connector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorSpecification {
    pub standard: ConnectorType,
    pub format: ConnectorFormat,
    pub power_type: PowerType,
    pub max_voltage: u32,
    pub max_amperage: u32,
    pub max_electric_power: Option<u32>,
}

/// Socket or cable-and-plug of an EVSE.
///
/// Only one connector of an EVSE can be in use at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    pub id: String,
    pub standard: ConnectorType,
    pub format: ConnectorFormat,
    pub power_type: PowerType,
    pub max_voltage: u32,
    pub max_amperage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_electric_power: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tariff_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl Connector {
    pub fn new(id: impl Into<String>, spec: ConnectorSpecification) -> Self {
        Self {
            id: id.into(),
            standard: spec.standard,
            format: spec.format,
            power_type: spec.power_type,
            max_voltage: spec.max_voltage,
            max_amperage: spec.max_amperage,
            max_electric_power: spec.max_electric_power,
            tariff_ids: Vec::new(),
            terms_and_conditions: None,
            last_updated: Utc::now(),
        }
    }

    /// Creates a connector keyed by a freshly generated unique identifier
    pub fn register<S: UniqueTokenSource>(
        generator: &IdentifierGenerator<S>,
        spec: ConnectorSpecification,
    ) -> Self {
        let connector = Self::new(generator.generate_unique_identifier().into_inner(), spec);
        debug!(connector_id = %connector.id, "{}", log::CONNECTOR_REGISTERED);
        connector
    }

    pub fn is_dc(&self) -> bool {
        self.power_type == PowerType::Dc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token_source::SequentialTokenSource;

    fn ccs() -> ConnectorSpecification {
        ConnectorSpecification {
            standard: ConnectorType::Iec62196T2Combo,
            format: ConnectorFormat::Cable,
            power_type: PowerType::Dc,
            max_voltage: 920,
            max_amperage: 500,
            max_electric_power: Some(350_000),
        }
    }

    #[test]
    fn test_register_assigns_unique_identifier() {
        let generator = IdentifierGenerator::with_source(SequentialTokenSource::starting_at(7));
        let connector = Connector::register(&generator, ccs());

        assert_eq!(connector.id, "000000000000000000000007");
        assert_eq!(connector.standard, ConnectorType::Iec62196T2Combo);
        assert!(connector.is_dc());
        assert!(connector.tariff_ids.is_empty());
    }

    #[test]
    fn test_optional_fields_are_omitted_from_json() {
        let mut connector = Connector::new("1", ccs());
        connector.max_electric_power = None;
        let json = serde_json::to_value(&connector).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["standard"], "IEC_62196_T2_COMBO");
        assert_eq!(json["format"], "CABLE");
        assert_eq!(json["power_type"], "DC");
        assert!(json.get("max_electric_power").is_none());
        assert!(json.get("tariff_ids").is_none());
        assert!(json.get("terms_and_conditions").is_none());
    }
}
