use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::curve::BondingCurveConfig;
use crate::error::Result;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub curve: BondingCurveConfig,
    pub launchpad: LaunchpadConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LaunchpadConfig {
    /// User-friendly address of the launchpad contract the events were
    /// scanned from.
    pub contract_address: String,
    /// JSON file of decoded deploy events for the offline source.
    pub events_file: PathBuf,
    pub poll_interval_secs: u64,
    /// Leaderboard depth; the frontend showed the top 2 of every view.
    pub top_k: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MonitoringConfig {
    pub enable_prometheus: bool,
    pub prometheus_port: u16,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        fs::write(path, config_str)?;
        Ok(())
    }
}
