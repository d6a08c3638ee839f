//! Integration test: Bark channel against a local mock push server.

use notifier_core::channels::{BarkChannel, NotificationChannel};
use notifier_core::models::{ChannelKind, ChannelStatus, Configuration, NotificationRequest};
use notifier_core::{notify, ChannelError};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use warp::http::StatusCode;
use warp::Filter;

type Recorded = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

/// Start a mock Bark server answering every GET with `status` and `body`.
fn start_mock_bark(status: StatusCode, body: serde_json::Value) -> (SocketAddr, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);

    let route = warp::get()
        .and(warp::path::tail())
        .and(warp::query::<HashMap<String, String>>())
        .map(move |tail: warp::path::Tail, query: HashMap<String, String>| {
            sink.lock().unwrap().push((tail.as_str().to_string(), query));
            warp::reply::with_status(warp::reply::json(&body), status)
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (addr, recorded)
}

fn channel(addr: SocketAddr) -> BarkChannel {
    BarkChannel::new(
        format!("http://{}", addr),
        "test_key_123".to_string(),
        "TestGroup".to_string(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_bark_delivery_success() {
    let (addr, recorded) = start_mock_bark(StatusCode::OK, json!({"code": 200, "message": "success"}));
    let request = NotificationRequest::parse("success", "Test message").unwrap();

    channel(addr).deliver(&request).await.unwrap();

    let calls = recorded.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (path, query) = &calls[0];
    assert!(path.starts_with("test_key_123/"));
    assert!(path.ends_with("/Test%20message"));
    assert_eq!(query.get("group").map(String::as_str), Some("TestGroup"));
    assert_eq!(query.get("sound").map(String::as_str), Some("bell"));
    assert!(query.contains_key("icon"));
}

#[tokio::test]
async fn test_bark_provider_rejection() {
    let (addr, _) = start_mock_bark(StatusCode::OK, json!({"code": 400, "message": "bad key"}));
    let request = NotificationRequest::parse("error", "boom").unwrap();

    match channel(addr).deliver(&request).await {
        Err(ChannelError::Provider(message)) => assert_eq!(message, "bad key"),
        other => panic!("expected Provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bark_http_error_status() {
    let (addr, _) = start_mock_bark(StatusCode::INTERNAL_SERVER_ERROR, json!({}));
    let request = NotificationRequest::parse("info", "hi").unwrap();

    assert!(matches!(
        channel(addr).deliver(&request).await,
        Err(ChannelError::Status(500))
    ));
}

#[tokio::test]
async fn test_bark_connection_refused() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let request = NotificationRequest::parse("info", "hi").unwrap();

    assert!(matches!(
        channel(addr).deliver(&request).await,
        Err(ChannelError::Http(_))
    ));
}

#[tokio::test]
async fn test_notify_with_only_push_enabled() {
    let (addr, recorded) = start_mock_bark(StatusCode::OK, json!({"code": 200}));
    let config = Configuration {
        bark_server: format!("http://{}", addr),
        bark_key: "test_key_123".to_string(),
        sound_enabled: false,
        system_notify_enabled: false,
        ..Configuration::default()
    };

    let report = notify("success", "Build completed in 2m 15s", &config)
        .await
        .unwrap();
    assert_eq!(report.exit_code(), 0);
    assert_eq!(
        report.outcome(ChannelKind::Push).unwrap().status,
        ChannelStatus::Succeeded
    );
    assert_eq!(recorded.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_notify_push_failure_is_exit_one() {
    let (addr, _) = start_mock_bark(StatusCode::SERVICE_UNAVAILABLE, json!({}));
    let config = Configuration {
        bark_server: format!("http://{}", addr),
        bark_key: "test_key_123".to_string(),
        sound_enabled: false,
        system_notify_enabled: false,
        ..Configuration::default()
    };

    let report = notify("error", "Deployment failed: timeout", &config)
        .await
        .unwrap();
    assert_eq!(report.exit_code(), 1);
}
