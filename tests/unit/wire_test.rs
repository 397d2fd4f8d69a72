//! Backend JSON shapes seen from the outside

use serde_json::json;
use std::sync::Arc;

use wcgen::api::wire::{DashboardResponse, GeneratePayload, PermalinkResponse};
use wcgen::presenter::ResultPresenter;
use wcgen::settings::{normalize, RawOptions};
use wcgen::GenerationRequest;

#[test]
fn permalink_envelope_feeds_the_presenter() {
    let response: PermalinkResponse = serde_json::from_value(json!({
        "success": true,
        "wordcloud": {
            "id": 42,
            "title": "Launch notes",
            "created_at": "2024-06-01T08:30:00.000123",
            "image_base64": "iVBORw0KGgo=",
            "word_frequencies": {"launch": 4, "rocket": 2, "crew": 2},
            "word_context": {"crew": ["The crew boarded.", "Crew safe."]},
            "word_count": 30,
            "unique_words": 3
        }
    }))
    .unwrap();
    assert!(response.success);

    let artifact = response.wordcloud.unwrap().into_artifact().unwrap();
    let presenter = ResultPresenter::new(Arc::new(artifact));

    assert_eq!(presenter.created_label().as_deref(), Some("2024-06-01 08:30"));
    assert_eq!(presenter.stats().total_words, Some(30));
    assert_eq!(
        presenter.ranked_frequencies(2),
        [("launch".to_string(), 4), ("crew".to_string(), 2)]
    );
    let crew = presenter.lookup(" crew ");
    assert_eq!(crew.frequency, 2);
    assert_eq!(crew.context.len(), 2);
}

#[test]
fn custom_colors_are_sent_as_hex_lists() {
    let raw = RawOptions {
        color_scheme: Some("custom".into()),
        custom_colors: Some("#ff0000, #00ff00".into()),
        background_color: Some("custom".into()),
        custom_background_color: Some("#123".into()),
        min_frequency: Some("2".into()),
        ..RawOptions::default()
    };
    let request =
        GenerationRequest::new("colorful text for a cloud", normalize(&raw).unwrap()).unwrap();
    let json = serde_json::to_value(GeneratePayload::from(&request)).unwrap();

    assert_eq!(json["settings"]["color_scheme"], json!(["#ff0000", "#00ff00"]));
    assert_eq!(json["settings"]["background_color"], json!("#123"));
    assert_eq!(json["settings"]["min_frequency"], json!(2));
    assert_eq!(json["text"], json!("colorful text for a cloud"));
    assert_eq!(json["title"], json!("Generated Word Cloud"));
}

#[test]
fn dashboard_statistics_keep_extra_counters() {
    let response: DashboardResponse = serde_json::from_value(json!({
        "statistics": {"total_users": 5, "total_wordclouds": 17, "popular_schemes": ["viridis"]}
    }))
    .unwrap();
    let stats = response.statistics.unwrap();
    assert_eq!(stats.total_wordclouds, Some(17));
    assert_eq!(stats.active_sessions, None);
    assert_eq!(stats.extra["popular_schemes"], json!(["viridis"]));
}
