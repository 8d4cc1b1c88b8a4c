//! Tests for `POST /api/links`.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::*;

fn uris(body: &serde_json::Value) -> Vec<String> {
    body["links"]
        .as_array()
        .expect("links array")
        .iter()
        .map(|link| link["link"].as_str().expect("link string").to_string())
        .collect()
}

/// ## Summary
/// A full form produces links in display order.
#[test_log::test(tokio::test)]
async fn links_for_full_form() {
    let service = create_test_service();

    let body = post_json(
        &service,
        "/api/links",
        &json!({
            "twitter": "@jdoe",
            "instagram": "jdoe",
            "linkedin": "jdoe",
            "youtube": "@jdoe",
            "facebook": "https://facebook.com/jdoe",
            "address": "1 Infinite Loop",
            "website": "example.com",
            "github": "@jdoe",
            "pinterest": "jdoe",
            "snapchat": "jdoe",
            "telegram": "@jdoe",
            "whatsapp": "+1 555 123 4567",
            "email": "jane@example.com",
            "telephone": "+1 555 0100",
            "phone": "+1 555 123 4567"
        }),
    )
    .await
    .assert_status(StatusCode::OK)
    .json();

    assert_eq!(
        uris(&body),
        [
            "tel:+15551234567",
            "tel:+15550100",
            "mailto:jane@example.com",
            "https://wa.me/15551234567",
            "https://t.me/jdoe",
            "https://www.snapchat.com/add/jdoe",
            "https://www.pinterest.com/jdoe/",
            "https://github.com/jdoe",
            "https://example.com",
            "https://www.google.com/maps/search/?api=1&query=1+Infinite+Loop",
            "https://facebook.com/jdoe",
            "https://www.youtube.com/@jdoe",
            "https://www.linkedin.com/in/jdoe",
            "https://www.instagram.com/jdoe",
            "https://twitter.com/jdoe",
        ]
    );
    assert_eq!(body["links"][0]["label"], "Mobile");
    assert_eq!(body["links"][0]["icon"], "📱");
    assert!(body["links"][0].get("assumed_country_code").is_none());
}

#[test_log::test(tokio::test)]
async fn links_skip_blank_and_invalid_fields() {
    let service = create_test_service();

    let body = post_json(
        &service,
        "/api/links",
        &json!({"phone": "123", "email": "   ", "github": "@", "website": "example.com"}),
    )
    .await
    .assert_status(StatusCode::OK)
    .json();

    assert_eq!(uris(&body), ["https://example.com"]);
}

#[test_log::test(tokio::test)]
async fn links_flag_assumed_country_code() {
    let service = create_test_service();

    let body = post_json(&service, "/api/links", &json!({"phone": "555 123 4567"}))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["links"][0]["link"], "tel:+15551234567");
    assert_eq!(body["links"][0]["assumed_country_code"], "1");
}

#[test_log::test(tokio::test)]
async fn links_follow_configured_country_code() {
    let mut settings = test_config();
    settings.links.default_country_code = Some("44".to_string());
    let service = create_test_service_with(settings);

    let body = post_json(&service, "/api/links", &json!({"phone": "07946 095800"}))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["links"][0]["link"], "tel:+4407946095800");
}

#[test_log::test(tokio::test)]
async fn links_reject_local_numbers_without_country_code() {
    let mut settings = test_config();
    settings.links.default_country_code = None;
    let service = create_test_service_with(settings);

    let body = post_json(
        &service,
        "/api/links",
        &json!({"phone": "555 123 4567", "telephone": "+44 20 7946 0958"}),
    )
    .await
    .assert_status(StatusCode::OK)
    .json();

    assert_eq!(uris(&body), ["tel:+442079460958"]);
}

#[test_log::test(tokio::test)]
async fn links_empty_form() {
    let service = create_test_service();

    let body = post_json(&service, "/api/links", &json!({}))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body, json!({"links": []}));
}

#[test_log::test(tokio::test)]
async fn links_reject_non_string_values() {
    let service = create_test_service();

    let response = post_json(&service, "/api/links", &json!({"phone": 5_551_234_567_u64}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({"error": "Invalid request body"}));
}
