use prometheus::{Counter, Gauge, Registry};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref SNAPSHOTS_COLLECTED: Counter = Counter::new(
        "snapshots_collected_total",
        "Total number of launchpad snapshots collected"
    ).unwrap();

    pub static ref EVENTS_SKIPPED: Counter = Counter::new(
        "deploy_events_skipped_total",
        "Deploy events dropped during validation or pricing"
    ).unwrap();

    pub static ref TOKENS_OBSERVED: Gauge = Gauge::new(
        "tokens_observed",
        "Token observations in the most recent snapshot"
    ).unwrap();
}

pub fn init() -> Result<(), prometheus::Error> {
    REGISTRY.register(Box::new(SNAPSHOTS_COLLECTED.clone()))?;
    REGISTRY.register(Box::new(EVENTS_SKIPPED.clone()))?;
    REGISTRY.register(Box::new(TOKENS_OBSERVED.clone()))?;
    Ok(())
}
