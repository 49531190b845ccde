//! OCPI Locations - eMI3 identifiers and the OCPI 2.2.1 Location model
//!
//! Generates eMI3-compliant identifiers (`NL*ABC*E*65A1F0C2B3D4E5F607182930`)
//! and bare unique identifiers used as keys for OCPI Locations, EVSEs and
//! Connectors, and provides serde types for the Location object graph.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{
    generate_emi3_compliant_id, generate_unique_id, Emi3Id, IdentifierGenerator, UniqueToken,
};
pub use error::{Error, InvalidArgument, ParseIdentifierError, Result};
