//! Log message constants
//!
//! This module centralizes the log messages used throughout the crate to
//! keep wording consistent between the library and the CLI.

/// Identifier generation messages
pub mod identifiers {
    pub const GENERATED_COMPLIANT: &str = "Generated eMI3 compliant identifier";
    pub const GENERATED_UNIQUE: &str = "Generated unique identifier";
    pub const REJECTED: &str = "Rejected eMI3 identifier request";
}

/// Location model messages
pub mod location {
    pub const REGISTERED: &str = "Registered location";
    pub const EVSE_REGISTERED: &str = "Registered EVSE";
    pub const CONNECTOR_REGISTERED: &str = "Registered connector";
}

/// Configuration messages
pub mod configuration {
    pub const LOADING_CONFIG: &str = "Loading configuration";
    pub const CONFIG_LOADED: &str = "Configuration loaded successfully";
}

/// CLI lifecycle messages
pub mod cli {
    pub const STARTING: &str = "Starting ocpi-ids";
    pub const INSPECTED: &str = "Inspected identifier";
}
