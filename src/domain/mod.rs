//! Domain types for eMI3 identifiers and OCPI Locations
//!
//! Identifier segments, tokens and the generator live here alongside the
//! Location object graph whose keys they populate.

pub mod id_generation;
pub mod identifiers;
pub mod location;
pub mod token_source;
pub mod validation_constants;

pub use id_generation::{generate_emi3_compliant_id, generate_unique_id, IdentifierGenerator};
pub use identifiers::{CountryCode, Emi3Id, PartyId, Segment, TypeId, UniqueToken};
pub use token_source::{ObjectIdSource, SequentialTokenSource, UniqueTokenSource};
