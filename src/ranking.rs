use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::curve::BondingCurveConfig;
use crate::models::TokenObservation;

/// Ranking criteria the leaderboard exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankKey {
    MarketCap,
    LaunchTime,
    Alpha,
    Beta,
    Gamma,
    Delta,
    Epsilon,
}

impl RankKey {
    pub const ALL: [RankKey; 7] = [
        RankKey::MarketCap,
        RankKey::LaunchTime,
        RankKey::Alpha,
        RankKey::Beta,
        RankKey::Gamma,
        RankKey::Delta,
        RankKey::Epsilon,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RankKey::MarketCap => "market_cap",
            RankKey::LaunchTime => "launch_time",
            RankKey::Alpha => "alpha",
            RankKey::Beta => "beta",
            RankKey::Gamma => "gamma",
            RankKey::Delta => "delta",
            RankKey::Epsilon => "epsilon",
        }
    }
}

/// One poll cycle's worth of observations, in transaction scan order.
/// Never mutated after construction; every ranking view borrows from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    config: BondingCurveConfig,
    captured_at: DateTime<Utc>,
    tokens: Vec<TokenObservation>,
}

impl Snapshot {
    pub fn new(
        config: BondingCurveConfig,
        captured_at: DateTime<Utc>,
        tokens: Vec<TokenObservation>,
    ) -> Self {
        Self {
            config,
            captured_at,
            tokens,
        }
    }

    pub fn config(&self) -> &BondingCurveConfig {
        &self.config
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn tokens(&self) -> &[TokenObservation] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Top `k` tokens by `key`, descending, without touching the backing
    /// store. Ties keep scan order (stable sort); scalars that are undefined
    /// at zero supply rank below every defined value. `k` larger than the
    /// snapshot returns the full ordering.
    pub fn top_k(&self, key: RankKey, k: usize) -> Vec<&TokenObservation> {
        let mut view: Vec<&TokenObservation> = self.tokens.iter().collect();
        view.sort_by(|a, b| compare_desc(key, a, b));
        view.truncate(k);
        view
    }
}

fn compare_desc(key: RankKey, a: &TokenObservation, b: &TokenObservation) -> Ordering {
    match key {
        RankKey::LaunchTime => b.launch_time.cmp(&a.launch_time),
        _ => compare_scalar_desc(scalar_for(key, b), scalar_for(key, a)),
    }
}

fn scalar_for(key: RankKey, token: &TokenObservation) -> Option<f64> {
    match key {
        RankKey::MarketCap => Some(token.market_cap),
        RankKey::Alpha => token.greeks.alpha,
        RankKey::Beta => Some(token.greeks.beta),
        RankKey::Gamma => token.greeks.gamma,
        RankKey::Delta => token.greeks.delta,
        RankKey::Epsilon => token.greeks.epsilon,
        RankKey::LaunchTime => unreachable!("launch time is compared as a timestamp"),
    }
}

fn compare_scalar_desc(b: Option<f64>, a: Option<f64>) -> Ordering {
    match (b, a) {
        (Some(b), Some(a)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// All leaderboard views for one snapshot, computed once. Replaces the
/// frontend pattern of re-sorting one shared list per criterion, which let
/// a later view reorder an earlier one.
#[derive(Debug)]
pub struct Leaderboard<'a> {
    pub k: usize,
    pub views: Vec<(RankKey, Vec<&'a TokenObservation>)>,
}

impl<'a> Leaderboard<'a> {
    pub fn build(snapshot: &'a Snapshot, k: usize) -> Self {
        let views = RankKey::ALL
            .iter()
            .map(|&key| (key, snapshot.top_k(key, k)))
            .collect();
        Self { k, views }
    }

    pub fn view(&self, key: RankKey) -> &[&'a TokenObservation] {
        self.views
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, view)| view.as_slice())
            .unwrap_or(&[])
    }
}
