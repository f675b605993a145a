use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub rates: RatesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Part id the health probe queries against the price source.
    #[serde(default = "default_probe_part_id")]
    pub health_probe_part_id: u64,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RatesConfig {
    #[serde(default = "default_usd_per_eur")]
    pub usd_per_eur: f64,
    #[serde(default = "default_gbp_per_eur")]
    pub gbp_per_eur: f64,
}

fn default_probe_part_id() -> u64 {
    1
}

fn default_log_filter() -> String {
    "quotis=info".to_string()
}

fn default_usd_per_eur() -> f64 {
    1.09
}

fn default_gbp_per_eur() -> f64 {
    0.85
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            health_probe_part_id: default_probe_part_id(),
            log_filter: default_log_filter(),
        }
    }
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            usd_per_eur: default_usd_per_eur(),
            gbp_per_eur: default_gbp_per_eur(),
        }
    }
}

impl Config {
    /// Layered load: optional files under `config/`, then `QUOTIS__*`
    /// environment overrides. Every key has a default, so an empty
    /// environment still yields a usable config.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("QUOTIS").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
