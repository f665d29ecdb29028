//! [`Config`]-related definitions.

use std::time;

use common::Money;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service configuration.
    pub service: Service,

    /// Cart snapshot storage configuration.
    pub storage: Storage,

    /// Payment gateway configuration.
    pub payment: Payment,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Flat delivery surcharge, in FCFA.
    #[default(Money::from(500))]
    pub delivery_fee: Money,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service { delivery_fee } = value;
        Self { delivery_fee }
    }
}

/// Cart snapshot storage configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Storage {
    /// Directory the snapshot is kept in.
    #[default(".".to_owned())]
    pub dir: String,

    /// Namespace (file stem) of the snapshot.
    #[default(service::infra::storage::file::DEFAULT_NAMESPACE.to_owned())]
    pub namespace: String,
}

/// Payment gateway configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Payment {
    /// Delay before the simulated processor answers.
    #[default(service::infra::payment::Simulated::DEFAULT_DELAY)]
    #[serde(with = "humantime_serde")]
    pub delay: time::Duration,

    /// Indicator whether every charge should be declined (for trying out the
    /// failure path).
    pub decline: bool,
}

impl From<Payment> for service::infra::payment::Simulated {
    fn from(value: Payment) -> Self {
        let Payment { delay, decline } = value;
        let gateway = Self::new(delay);
        if decline {
            gateway.declining()
        } else {
            gateway
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use service::infra::payment::Simulated;

    use super::Payment;

    #[test]
    fn declining_payment_keeps_the_configured_delay() {
        let delay = Duration::from_millis(200);

        let gateway = Simulated::from(Payment {
            delay,
            decline: true,
        });

        assert_eq!(gateway, Simulated::new(delay).declining());
    }
}
