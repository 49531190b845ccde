//! Infrastructure concerns shared by the library and the CLI

pub mod log_messages;
pub mod telemetry;
