//! eMI3-compliant and bare unique identifier generation

use crate::domain::identifiers::{CountryCode, Emi3Id, PartyId, Segment, TypeId, UniqueToken};
use crate::domain::token_source::{ObjectIdSource, UniqueTokenSource};
use crate::error::InvalidArgument;
use crate::infrastructure::log_messages::identifiers as log;
use tracing::{debug, trace};

/// Generates identifiers from a shared [`UniqueTokenSource`].
///
/// Stateless per call; every call draws exactly one token from the source.
#[derive(Debug, Clone)]
pub struct IdentifierGenerator<S = &'static ObjectIdSource> {
    source: S,
}

impl IdentifierGenerator {
    /// Generator backed by the process-wide [`ObjectIdSource`]
    pub fn process_wide() -> Self {
        Self::with_source(ObjectIdSource::shared())
    }
}

impl Default for IdentifierGenerator {
    fn default() -> Self {
        Self::process_wide()
    }
}

impl<S: UniqueTokenSource> IdentifierGenerator<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Builds `<country_code>*<party_id>*[<type_id>*]<SUFFIX>` from raw strings.
    ///
    /// The country code is checked before the party id, and only the first
    /// failure is reported. An empty `type_id` is treated as absent.
    pub fn generate_compliant_identifier(
        &self,
        country_code: &str,
        party_id: &str,
        type_id: Option<&str>,
    ) -> Result<Emi3Id, InvalidArgument> {
        let (country_code, party_id, type_id) =
            match validate_segments(country_code, party_id, type_id) {
                Ok(segments) => segments,
                Err(reason) => {
                    debug!(%reason, "{}", log::REJECTED);
                    return Err(reason);
                }
            };

        Ok(self.compliant_identifier(&country_code, &party_id, type_id.as_ref()))
    }

    /// Typed form of [`Self::generate_compliant_identifier`]; cannot fail
    pub fn compliant_identifier(
        &self,
        country_code: &CountryCode,
        party_id: &PartyId,
        type_id: Option<&TypeId>,
    ) -> Emi3Id {
        let id = Emi3Id::new(
            country_code.clone(),
            party_id.clone(),
            type_id.cloned(),
            self.source.next_token(),
        );
        trace!(%id, "{}", log::GENERATED_COMPLIANT);
        id
    }

    /// A bare suffix with no prefix segments
    pub fn generate_unique_identifier(&self) -> UniqueToken {
        let token = self.source.next_token();
        trace!(%token, "{}", log::GENERATED_UNIQUE);
        token
    }
}

fn validate_segments(
    country_code: &str,
    party_id: &str,
    type_id: Option<&str>,
) -> Result<(CountryCode, PartyId, Option<TypeId>), InvalidArgument> {
    if country_code.is_empty() {
        return Err(InvalidArgument::MissingCountryCode);
    }
    let country_code = CountryCode::try_new(country_code.to_string()).map_err(|_| {
        InvalidArgument::SeparatorInSegment {
            segment: Segment::CountryCode,
        }
    })?;

    if party_id.is_empty() {
        return Err(InvalidArgument::MissingPartyId);
    }
    let party_id = PartyId::try_new(party_id.to_string()).map_err(|_| {
        InvalidArgument::SeparatorInSegment {
            segment: Segment::PartyId,
        }
    })?;

    let type_id = type_id
        .filter(|t| !t.is_empty())
        .map(|t| {
            TypeId::try_new(t.to_string()).map_err(|_| InvalidArgument::SeparatorInSegment {
                segment: Segment::TypeId,
            })
        })
        .transpose()?;

    Ok((country_code, party_id, type_id))
}

/// [`IdentifierGenerator::generate_compliant_identifier`] over the process-wide source, as a string
pub fn generate_emi3_compliant_id(
    country_code: &str,
    party_id: &str,
    type_id: Option<&str>,
) -> Result<String, InvalidArgument> {
    IdentifierGenerator::process_wide()
        .generate_compliant_identifier(country_code, party_id, type_id)
        .map(String::from)
}

/// [`IdentifierGenerator::generate_unique_identifier`] over the process-wide source, as a string
pub fn generate_unique_id() -> String {
    IdentifierGenerator::process_wide()
        .generate_unique_identifier()
        .into_inner()
}
