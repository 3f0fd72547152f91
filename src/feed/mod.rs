use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::LaunchpadConfig;
use crate::curve::BondingCurveConfig;
use crate::error::{Error, Result};
use crate::metrics;
use crate::models::TokenObservation;
use crate::ranking::Snapshot;
use crate::validation;

/// One deploy (op 1) message decoded from the launchpad's transaction
/// history, in scan order. Decoding the cell body and calling the contract
/// getters happens upstream; this is the boundary type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeployEvent {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub timestamp: DateTime<Utc>,
}

/// Where deploy events come from. Production implementations wrap an RPC
/// client; tests and the demo binary use `JsonFileSource`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChainSource: Send + Sync {
    async fn deploy_events(&self) -> Result<Vec<DeployEvent>>;
}

/// Reads deploy events from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ChainSource for JsonFileSource {
    async fn deploy_events(&self) -> Result<Vec<DeployEvent>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            Error::FeedError(format!("failed to read events file {:?}: {}", self.path, e))
        })?;
        let events: Vec<DeployEvent> = serde_json::from_str(&raw)?;
        Ok(events)
    }
}

/// Builds one immutable snapshot per poll cycle from a chain source.
pub struct SnapshotCollector<S: ChainSource> {
    source: S,
    curve: BondingCurveConfig,
    launchpad: LaunchpadConfig,
}

impl<S: ChainSource> SnapshotCollector<S> {
    pub fn new(source: S, curve: BondingCurveConfig, launchpad: LaunchpadConfig) -> Self {
        Self {
            source,
            curve,
            launchpad,
        }
    }

    /// Pulls the current deploy events and derives one observation per
    /// event, preserving scan order. Events that fail validation are
    /// skipped with a warning rather than failing the whole cycle.
    pub async fn collect(&self) -> Result<Snapshot> {
        let events = self.source.deploy_events().await?;
        info!(
            "Collected {} deploy events from launchpad {}",
            events.len(),
            self.launchpad.contract_address
        );

        let mut tokens = Vec::with_capacity(events.len());
        for event in events {
            if let Err(e) = validate_event(&event) {
                warn!("Skipping deploy event for {:?}: {}", event.address, e);
                metrics::EVENTS_SKIPPED.inc();
                continue;
            }
            match TokenObservation::derive(&self.curve, event) {
                Ok(token) => tokens.push(token),
                Err(e) => {
                    warn!("Skipping unpriceable deploy event: {}", e);
                    metrics::EVENTS_SKIPPED.inc();
                }
            }
        }

        metrics::SNAPSHOTS_COLLECTED.inc();
        metrics::TOKENS_OBSERVED.set(tokens.len() as f64);

        Ok(Snapshot::new(self.curve, Utc::now(), tokens))
    }
}

fn validate_event(event: &DeployEvent) -> Result<()> {
    validation::validate_address(&event.address)?;
    validation::validate_name(&event.name)?;
    validation::validate_symbol(&event.symbol)?;
    Ok(())
}
