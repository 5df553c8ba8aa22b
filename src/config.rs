/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub traffic: TrafficConfig,
}

/**
 * Building and run parameters.
 *
 * # Fields
 * - `n_floors`:        Number of floors, numbered from 1.
 * - `n_elevators`:     Number of cars in the bank.
 * - `tick_interval`:   Wall-clock length of one simulated step, in milliseconds.
 * - `run_duration`:    Total run time before shutdown, in milliseconds.
 * - `request_buffer`:  Capacity of the inbound request channel. 0 means unbounded.
 */
#[derive(Deserialize, Clone, Debug)]
pub struct SimulationConfig {
    pub n_floors: u8,
    pub n_elevators: u8,
    pub tick_interval: u64,
    pub run_duration: u64,
    #[serde(default)]
    pub request_buffer: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TrafficConfig {
    pub min_interval: u64,
    pub max_interval: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        self.traffic.validate()
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_floors < 2 {
            return Err(ConfigError::Invalid(format!(
                "n_floors must be at least 2, got {}",
                self.n_floors
            )));
        }
        if self.n_elevators < 1 {
            return Err(ConfigError::Invalid(
                "n_elevators must be at least 1".to_string(),
            ));
        }
        if self.tick_interval == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval)
    }

    pub fn run_duration(&self) -> Duration {
        Duration::from_millis(self.run_duration)
    }
}

impl TrafficConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_interval > self.max_interval {
            return Err(ConfigError::Invalid(format!(
                "traffic min_interval ({}) exceeds max_interval ({})",
                self.min_interval, self.max_interval
            )));
        }
        Ok(())
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
