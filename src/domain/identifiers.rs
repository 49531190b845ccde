//! eMI3 identifier types
//!
//! An eMI3-compliant identifier is `<country_code>*<party_id>*[<type_id>*]<suffix>`,
//! where the suffix is a 24 character upper-case hex [`UniqueToken`]. The
//! segment newtypes reject empty values and values containing the `*`
//! separator, so every [`Emi3Id`] renders to a string that parses back to
//! the same parts.

use crate::domain::validation_constants::{emi3, unique_token};
use crate::error::ParseIdentifierError;
use derive_more::Display;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names a segment of an eMI3 identifier, for error reporting
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    #[display("country_code")]
    CountryCode,
    #[display("party_id")]
    PartyId,
    #[display("type_id")]
    TypeId,
    #[display("unique suffix")]
    Suffix,
}

/// Country code of the party owning the identified entity (ISO 3166 alpha-2 by convention)
#[nutype(
    validate(not_empty, predicate = |code: &str| !code.contains(emi3::SEPARATOR)),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct CountryCode(String);

/// Party id assigned to the owning operator
#[nutype(
    validate(not_empty, predicate = |party: &str| !party.contains(emi3::SEPARATOR)),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct PartyId(String);

/// Optional entity-type segment, e.g. `E` for EVSEs
#[nutype(
    validate(not_empty, predicate = |kind: &str| !kind.contains(emi3::SEPARATOR)),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct TypeId(String);

impl TypeId {
    /// Type id used for EVSE identifiers
    pub fn evse() -> Self {
        Self::try_new(emi3::EVSE_TYPE_ID.to_string()).expect("EVSE type id is valid")
    }
}

/// 24 upper-case hex characters drawn from a unique token source
#[nutype(
    validate(regex = r"^[0-9A-F]{24}$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct UniqueToken(String);

impl UniqueToken {
    /// Renders twelve raw bytes as a token
    pub fn from_bytes(bytes: [u8; unique_token::BYTE_LENGTH]) -> Self {
        Self::try_new(hex::encode_upper(bytes))
            .expect("upper-case hex of 12 bytes is a valid token")
    }

    /// Decodes the token back into its twelve raw bytes
    pub fn to_bytes(&self) -> [u8; unique_token::BYTE_LENGTH] {
        let mut bytes = [0u8; unique_token::BYTE_LENGTH];
        hex::decode_to_slice(self.to_string(), &mut bytes).expect("token is validated hex");
        bytes
    }
}

/// An eMI3-compliant identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Emi3Id {
    country_code: CountryCode,
    party_id: PartyId,
    type_id: Option<TypeId>,
    suffix: UniqueToken,
}

impl Emi3Id {
    pub fn new(
        country_code: CountryCode,
        party_id: PartyId,
        type_id: Option<TypeId>,
        suffix: UniqueToken,
    ) -> Self {
        Self {
            country_code,
            party_id,
            type_id,
            suffix,
        }
    }

    pub fn country_code(&self) -> &CountryCode {
        &self.country_code
    }

    pub fn party_id(&self) -> &PartyId {
        &self.party_id
    }

    pub fn type_id(&self) -> Option<&TypeId> {
        self.type_id.as_ref()
    }

    pub fn suffix(&self) -> &UniqueToken {
        &self.suffix
    }

    /// Everything before the suffix, including the trailing separator
    pub fn prefix(&self) -> String {
        let sep = emi3::SEPARATOR;
        match &self.type_id {
            Some(type_id) => format!(
                "{}{sep}{}{sep}{}{sep}",
                self.country_code, self.party_id, type_id
            ),
            None => format!("{}{sep}{}{sep}", self.country_code, self.party_id),
        }
    }
}

impl fmt::Display for Emi3Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix(), self.suffix)
    }
}

impl FromStr for Emi3Id {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split(emi3::SEPARATOR).collect();
        let (country_code, party_id, type_id, suffix) = match segments.as_slice() {
            [country_code, party_id, suffix] => (*country_code, *party_id, None, *suffix),
            [country_code, party_id, type_id, suffix] => {
                (*country_code, *party_id, Some(*type_id), *suffix)
            }
            _ => {
                return Err(ParseIdentifierError::SegmentCount {
                    found: segments.len(),
                })
            }
        };

        // Segments come from splitting on the separator, so emptiness is the only failure left
        let country_code = CountryCode::try_new(country_code.to_string()).map_err(|_| {
            ParseIdentifierError::EmptySegment {
                segment: Segment::CountryCode,
            }
        })?;
        let party_id = PartyId::try_new(party_id.to_string()).map_err(|_| {
            ParseIdentifierError::EmptySegment {
                segment: Segment::PartyId,
            }
        })?;
        let type_id = type_id
            .map(|t| {
                TypeId::try_new(t.to_string()).map_err(|_| ParseIdentifierError::EmptySegment {
                    segment: Segment::TypeId,
                })
            })
            .transpose()?;
        if suffix.is_empty() {
            return Err(ParseIdentifierError::EmptySegment {
                segment: Segment::Suffix,
            });
        }
        let suffix = UniqueToken::try_new(suffix.to_string()).map_err(|_| {
            ParseIdentifierError::InvalidSuffix {
                suffix: suffix.to_string(),
            }
        })?;

        Ok(Self::new(country_code, party_id, type_id, suffix))
    }
}

impl TryFrom<String> for Emi3Id {
    type Error = ParseIdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Emi3Id> for String {
    fn from(id: Emi3Id) -> Self {
        id.to_string()
    }
}
