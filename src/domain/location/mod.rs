//! OCPI 2.2.1 Location object graph
//!
//! A [`Location`] holds [`Evse`]s, which hold [`Connector`]s. The types are
//! plain serde data: they check shape and closed value sets when
//! deserialized, and leave business rules to their consumers. The
//! `register` constructors mint identifiers with an
//! [`IdentifierGenerator`](crate::domain::id_generation::IdentifierGenerator).

pub mod classes;
pub mod connector;
pub mod enums;
pub mod evse;
pub mod site;

pub use classes::*;
pub use connector::{Connector, ConnectorSpecification};
pub use enums::*;
pub use evse::Evse;
pub use site::{Location, LocationSite};
