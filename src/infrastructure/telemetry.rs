//! Tracing subscriber setup

use crate::config::{LogFormat, LoggingSettings};
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` wins, otherwise the configured level
pub fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
}

/// Installs the global fmt subscriber; later calls are no-ops
pub fn init(settings: &LoggingSettings) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr);

    // try_init fails only when a subscriber is already installed
    let _ = match settings.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            format: LogFormat::Compact,
        };
        init(&settings);
        init(&settings);
    }
}
