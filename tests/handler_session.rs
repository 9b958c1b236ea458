mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use seo_landing::domain::tracking_payload::TrackingPayload;
use serde_json::json;

#[tokio::test]
async fn test_session_without_body() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(common::landing_app(state)).unwrap();

    let response = server.post("/api/session").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();

    let session_id = json["session_id"].as_str().unwrap();
    assert_eq!(
        json["deep_link"],
        format!("https://t.me/site_SEO_cheker_bot?start=session_{session_id}")
    );
    assert_eq!(json["status"]["visible"], true);
    assert_eq!(json["status"]["kind"], "success");
    assert_eq!(json["status"]["icon"], "✅");
    assert_eq!(
        json["status"]["text"],
        "✅ Открываем Telegram... Отправьте боту URL сайта для проверки."
    );

    let TrackingPayload::Session(payload) = common::next_payload(&mut rx).await else {
        panic!("expected a session payload");
    };
    assert_eq!(payload.session_id.to_string(), session_id);
    assert!(payload.utm.is_empty());
    assert_eq!(payload.referrer, None);
}

#[tokio::test]
async fn test_session_with_page_context() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(common::landing_app(state)).unwrap();

    server
        .post("/api/session")
        .add_header("User-Agent", "TestBrowser/1.0")
        .json(&json!({
            "query": "?utm_source=vk&utm_medium=cpc",
            "referrer": "https://vk.com/"
        }))
        .await
        .assert_status_ok();

    let TrackingPayload::Session(payload) = common::next_payload(&mut rx).await else {
        panic!("expected a session payload");
    };
    assert_eq!(payload.utm.utm_source.as_deref(), Some("vk"));
    assert_eq!(payload.utm.utm_medium.as_deref(), Some("cpc"));
    assert_eq!(payload.referrer.as_deref(), Some("https://vk.com/"));
    assert_eq!(payload.user_agent.as_deref(), Some("TestBrowser/1.0"));
}

#[tokio::test]
async fn test_session_rejects_malformed_json() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(common::landing_app(state)).unwrap();

    let response = server
        .post("/api/session")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    common::assert_no_payload(&mut rx).await;
}

#[tokio::test]
async fn test_session_succeeds_when_tracking_fails() {
    let (state, mut rx) = common::create_failing_state();
    let server = TestServer::new(common::landing_app(state)).unwrap();

    let response = server.post("/api/session").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"]["kind"], "success");
    common::next_payload(&mut rx).await;
}
