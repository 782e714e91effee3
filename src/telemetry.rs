use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TelemetryConfig;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `config.filter`. Returns `false` if a subscriber was
/// already installed, which keeps repeated calls (tests, several demos in one
/// process) harmless.
pub fn init(config: &TelemetryConfig) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(config.ansi))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let config = TelemetryConfig::default();
        init(&config);
        assert!(!init(&config));
    }
}
