use flightplan_core::pricing::DEFAULT_FIRST_CLASS_SURCHARGE;
use flightplan_core::LayoutConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Per first-class seat, minor units.
    #[serde(default = "default_surcharge")]
    pub first_class_surcharge: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Share of seats pre-booked on the sample flights.
    #[serde(default = "default_occupancy")]
    pub occupancy_rate: f64,
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            first_class_surcharge: default_surcharge(),
            currency: default_currency(),
            occupancy_rate: default_occupancy(),
        }
    }
}

fn default_surcharge() -> i64 { DEFAULT_FIRST_CLASS_SURCHARGE }
fn default_currency() -> String { "EUR".to_string() }
fn default_occupancy() -> f64 { 0.4 }

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

fn default_host() -> String { "0.0.0.0".to_string() }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked local overrides
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `FLIGHTPLAN__SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("FLIGHTPLAN").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Parses a TOML document with no file or environment lookup.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
