use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use herobar_core::{
    Engine, PageEntry, PageMeta, PageRegistry, StaticLocation, STICKY_BODY_CLASS,
};
use herobar_server::{build_app, AppState};

fn build_test_app() -> Router {
    let provider = Arc::new(StaticLocation {
        name: Some("Manchester".to_string()),
        telephone: Some("0161 496 0000".to_string()),
    });

    let mut off_meta = BTreeMap::new();
    off_meta.insert("_hb_intent".to_string(), "off".to_string());

    let mut override_meta = BTreeMap::new();
    override_meta.insert("hb_cta_text".to_string(), "Book A Lock Change".to_string());

    let registry = PageRegistry::new(vec![
        PageEntry {
            slug: "lock-change-quote".to_string(),
            title: "Lock Change Quotes".to_string(),
            meta: PageMeta(off_meta),
        },
        PageEntry {
            slug: "lock-change".to_string(),
            title: "Lock Change Services".to_string(),
            meta: PageMeta(override_meta),
        },
    ]);

    build_app(AppState {
        engine: Arc::new(Engine::new(provider)),
        registry: Arc::new(registry),
    })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_reports_page_count() {
    let (status, json) = get_json(build_test_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["pages"], 2);
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn decision_for_lockout_path_is_emergency() {
    let (status, json) = get_json(
        build_test_app(),
        "/api/v1/decision?path=/locked-out-emergency/",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["intent"], "emergency");
    assert_eq!(data["suppressed"], false);
    assert_eq!(data["body_class"], STICKY_BODY_CLASS);
    assert_eq!(data["phone_display"], "0161 496 0000");
    assert_eq!(data["phone_href"], "tel:01614960000");
    assert_eq!(data["content"]["title"], "Emergency Locksmith Manchester");
}

#[tokio::test]
async fn decision_honors_page_off_override() {
    let (status, json) = get_json(
        build_test_app(),
        "/api/v1/decision?path=/lock-change-quote/",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["intent"], "off");
    assert_eq!(data["suppressed"], false);
    assert!(data["content"].is_null());
    assert!(data["body_class"].is_null());
}

#[tokio::test]
async fn decision_applies_registry_overrides() {
    let (status, json) = get_json(build_test_app(), "/api/v1/decision?path=/lock-change/").await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["intent"], "planned");
    assert_eq!(data["content"]["cta_text"], "Book A Lock Change");
}

#[tokio::test]
async fn decision_suppresses_for_admin_context() {
    let (status, json) = get_json(
        build_test_app(),
        "/api/v1/decision?path=/locked-out/&admin=true",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["suppressed"], true);
    assert!(data["content"].is_null());
    assert!(data["body_class"].is_null());
}

#[tokio::test]
async fn decision_requires_path() {
    let (status, json) = get_json(build_test_app(), "/api/v1/decision").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn content_endpoint_returns_base_record() {
    let (status, json) = get_json(build_test_app(), "/api/v1/content/planned").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["title"],
        "Lock Changes & Security Upgrades [location]"
    );
}

#[tokio::test]
async fn content_endpoint_rejects_unknown_intent() {
    let (status, json) = get_json(build_test_app(), "/api/v1/content/bogus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn content_endpoint_has_no_record_for_off() {
    let (status, json) = get_json(build_test_app(), "/api/v1/content/off").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn intents_endpoint_lists_keyword_sets() {
    let (status, json) = get_json(build_test_app(), "/api/v1/intents").await;
    assert_eq!(status, StatusCode::OK);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data[0]["intent"], "emergency");
    assert!(data[0]["keywords"]
        .as_array()
        .unwrap()
        .iter()
        .any(|k| k == "locked-out"));
}

#[tokio::test]
async fn pages_endpoint_summarizes_registry() {
    let (status, json) = get_json(build_test_app(), "/api/v1/pages").await;
    assert_eq!(status, StatusCode::OK);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["slug"], "lock-change-quote");
    assert_eq!(data[0]["intent_override"], "off");
    assert_eq!(data[1]["override_count"], 1);
}
