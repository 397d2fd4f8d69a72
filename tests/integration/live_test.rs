//! Dashboard seeding and live statistics delivery.

use std::sync::atomic::Ordering;
use std::time::Duration;

use serde_json::json;
use wcgen::api::ApiError;
use wcgen::live::transport::pump;
use wcgen::live::{Dashboard, LiveError, LiveUpdateChannel, Statistics, DASHBOARD_UPDATE};

use crate::helpers::{Reply, StubApi};

fn stats(users: u64, clouds: u64) -> Statistics {
    Statistics {
        total_users: Some(users),
        total_wordclouds: Some(clouds),
        ..Statistics::default()
    }
}

#[tokio::test]
async fn dashboard_seeds_from_one_fetch() {
    let api = StubApi::new();
    api.push_dashboard(Reply::Now(Ok(stats(42, 123))));
    let mut dashboard = Dashboard::new(api.clone(), Duration::from_secs(5));

    assert!(dashboard.statistics().is_none());
    let loaded = dashboard.load().await.unwrap();
    assert_eq!(loaded.total_wordclouds, Some(123));
    assert_eq!(api.dashboard_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn dashboard_fetch_failure_is_reported() {
    let api = StubApi::new();
    api.push_dashboard(Reply::Now(Err(ApiError::Transport("HTTP 503".into()))));
    let mut dashboard = Dashboard::new(api.clone(), Duration::from_secs(5));

    assert!(matches!(dashboard.load().await, Err(LiveError::Fetch(_))));
    assert!(dashboard.statistics().is_none());
}

#[tokio::test]
async fn dashboard_fetch_times_out() {
    let api = StubApi::new();
    api.push_dashboard(Reply::Hang);
    let timeout = Duration::from_millis(50);
    let mut dashboard = Dashboard::new(api.clone(), timeout);

    assert!(matches!(
        dashboard.load().await,
        Err(LiveError::Timeout(t)) if t == timeout
    ));
}

#[tokio::test]
async fn live_update_replaces_seeded_statistics() {
    let api = StubApi::new();
    api.push_dashboard(Reply::Now(Ok(stats(1, 1))));
    let mut dashboard = Dashboard::new(api.clone(), Duration::from_secs(5));
    dashboard.load().await.unwrap();

    let channel = LiveUpdateChannel::new();
    let mut subscription = channel.subscribe();
    channel
        .deliver(
            DASHBOARD_UPDATE,
            json!({"statistics": {"total_users": 43, "active_sessions": 2}}),
        )
        .unwrap();

    let current = dashboard.follow(&mut subscription).await.unwrap();
    assert_eq!(current.total_users, Some(43));
    // Replaced wholesale, not merged
    assert_eq!(current.total_wordclouds, None);
}

#[tokio::test]
async fn every_subscriber_sees_the_latest_update() {
    let channel = LiveUpdateChannel::new();
    let mut first = channel.subscribe();
    let mut second = channel.subscribe();

    channel.publish(stats(1, 1));
    channel.publish(stats(2, 2));

    assert_eq!(first.next().await, Some(stats(2, 2)));
    assert_eq!(second.next().await, Some(stats(2, 2)));
}

#[tokio::test]
async fn pumped_events_reach_a_following_dashboard() {
    let api = StubApi::new();
    let mut dashboard = Dashboard::new(api.clone(), Duration::from_secs(5));
    let channel = LiveUpdateChannel::new();
    let mut subscription = channel.subscribe();

    let stream = concat!(
        "{\"event\":\"dashboard_update\",\"data\":{\"statistics\":{\"total_users\":7}}}\n",
        "{\"event\":\"heartbeat\"}\n",
    );
    assert_eq!(pump(stream.as_bytes(), &channel).await.unwrap(), 1);

    let current = dashboard.follow(&mut subscription).await.unwrap();
    assert_eq!(current.total_users, Some(7));
    assert_eq!(api.network_calls(), 0);
}

#[tokio::test]
async fn closing_the_channel_ends_following() {
    let api = StubApi::new();
    let mut dashboard = Dashboard::new(api.clone(), Duration::from_secs(5));
    let channel = LiveUpdateChannel::new();
    let mut subscription = channel.subscribe();
    channel.close();

    assert!(dashboard.follow(&mut subscription).await.is_none());
}
