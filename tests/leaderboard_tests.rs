use chrono::{TimeZone, Utc};
use std::fs;

use launchpad_analytics::config::LaunchpadConfig;
use launchpad_analytics::curve::BondingCurveConfig;
use launchpad_analytics::feed::{DeployEvent, JsonFileSource, SnapshotCollector};
use launchpad_analytics::ranking::{Leaderboard, RankKey};

fn event(name: &str, suffix: char, supply: u64, launch_secs: i64) -> DeployEvent {
    let mut address = "EQDNtSKblX4-stYHbJj0gzXvbxN4Dz0je7rk1-I73REFAB".to_string();
    address.push(suffix);
    address.push(suffix);
    DeployEvent {
        address,
        name: name.to_string(),
        symbol: name.to_uppercase(),
        total_supply: supply,
        timestamp: Utc.timestamp_opt(launch_secs, 0).unwrap(),
    }
}

fn launchpad(events_file: std::path::PathBuf) -> LaunchpadConfig {
    LaunchpadConfig {
        contract_address: "EQDNtSKblX4-stYHbJj0gzXvbxN4Dz0je7rk1-I73REFABrh".to_string(),
        events_file,
        poll_interval_secs: 30,
        top_k: 2,
    }
}

#[tokio::test]
async fn test_file_source_to_leaderboard() {
    let events = vec![
        event("doge", 'a', 10, 100),
        event("pepe", 'b', 3, 300),
        event("wojak", 'c', 7, 200),
    ];
    let path = std::env::temp_dir().join("launchpad-analytics-integration.json");
    fs::write(&path, serde_json::to_string(&events).unwrap()).unwrap();

    let curve = BondingCurveConfig::default();
    let collector = SnapshotCollector::new(
        JsonFileSource::new(path.clone()),
        curve,
        launchpad(path.clone()),
    );

    let snapshot = collector.collect().await.unwrap();
    assert_eq!(snapshot.len(), 3);

    let board = Leaderboard::build(&snapshot, 2);

    // Market cap grows with supply on this curve, so doge (supply 10) leads.
    let by_cap = board.view(RankKey::MarketCap);
    assert_eq!(by_cap[0].name, "doge");
    assert_eq!(by_cap[1].name, "wojak");

    // Newest first.
    let by_launch = board.view(RankKey::LaunchTime);
    assert_eq!(by_launch[0].name, "pepe");
    assert_eq!(by_launch[1].name, "wojak");

    // Beta is constant across tokens, so scan order decides the whole view.
    let by_beta = board.view(RankKey::Beta);
    assert_eq!(by_beta[0].name, "doge");
    assert_eq!(by_beta[1].name, "pepe");

    // Delta is 1.0 for every launched token.
    for token in board.view(RankKey::Delta) {
        assert_eq!(token.greeks.delta, Some(1.0));
    }

    // Ranking passes must not reorder the snapshot itself.
    let names: Vec<&str> = snapshot.tokens().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["doge", "pepe", "wojak"]);

    let _ = fs::remove_file(path);
}
