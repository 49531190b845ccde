//! Validation constants for domain types
//!
//! This module centralizes the separator and token widths used by the
//! identifier types.

/// eMI3 identifier layout
pub mod emi3 {
    /// Literal separator between identifier segments
    pub const SEPARATOR: char = '*';

    /// Type id used for EVSE identifiers
    pub const EVSE_TYPE_ID: &str = "E";
}

/// Unique token (identifier suffix) shape
pub mod unique_token {
    /// Raw token width in bytes
    pub const BYTE_LENGTH: usize = 12;

    /// Rendered token width in hex characters
    pub const HEX_LENGTH: usize = BYTE_LENGTH * 2;

    /// Width of the per-process random discriminator
    pub const PROCESS_UNIQUE_LENGTH: usize = 5;

    /// Mask applied to the wrapping 24-bit counter
    pub const COUNTER_MASK: u32 = 0x00FF_FFFF;
}
