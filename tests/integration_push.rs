mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{CountingGateway, body_json, json_request, send, test_app};
use schoolhub_config::PushConfig;
use schoolhub_models::PushTicket;
use schoolhub_push::{ExpoGateway, PushError};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RELAY: &str = "/functions/v1/send-push-notification";
const UNUSED_REMOTE: &str = "http://127.0.0.1:9";

fn batch(tokens: &[&str]) -> serde_json::Value {
    json!({
        "tokens": tokens,
        "notification": {
            "title": "Timetable updated",
            "body": "Chemistry moved to Room 204",
            "data": {"screen": "lectures"}
        }
    })
}

#[tokio::test]
async fn test_empty_tokens_rejected_without_gateway_call() {
    let gateway = CountingGateway::accepting();
    let app = test_app(UNUSED_REMOTE, gateway.clone());

    let response = send(app, json_request("POST", RELAY, None, Some(batch(&[])))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No push tokens provided");
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn test_missing_tokens_rejected() {
    let gateway = CountingGateway::accepting();
    let app = test_app(UNUSED_REMOTE, gateway.clone());

    let body = json!({"notification": {"title": "t", "body": "b"}});
    let response = send(app, json_request("POST", RELAY, None, Some(body))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn test_null_tokens_rejected() {
    let gateway = CountingGateway::accepting();
    let app = test_app(UNUSED_REMOTE, gateway.clone());

    let body = json!({"tokens": null, "notification": {"title": "t", "body": "b"}});
    let response = send(app, json_request("POST", RELAY, None, Some(body))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No push tokens provided");
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn test_mixed_tickets_are_tallied() {
    let gateway = CountingGateway::new(|messages| {
        assert_eq!(messages.len(), 4);
        Ok(vec![
            PushTicket::Ok { id: Some("a".into()) },
            PushTicket::Ok { id: Some("b".into()) },
            PushTicket::Error {
                message: Some("\"ExponentPushToken[x]\" is not a registered push notification recipient".into()),
                details: Some(json!({"error": "DeviceNotRegistered"})),
            },
            PushTicket::Ok { id: Some("d".into()) },
        ])
    });
    let app = test_app(UNUSED_REMOTE, gateway.clone());

    let response = send(
        app,
        json_request("POST", RELAY, None, Some(batch(&["t1", "t2", "t3", "t4"]))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["totalSent"], 4);
    assert_eq!(body["successCount"], 3);
    assert_eq!(body["errorCount"], 1);
    assert_eq!(body["results"].as_array().unwrap().len(), 4);
    assert_eq!(body["results"][2]["status"], "error");
    assert_eq!(gateway.calls(), 1);
}

#[tokio::test]
async fn test_gateway_failure_becomes_failure_envelope() {
    let gateway = CountingGateway::new(|_| {
        Err(PushError::gateway(Some(503), "Service temporarily unavailable"))
    });
    let app = test_app(UNUSED_REMOTE, gateway.clone());

    let response = send(app, json_request("POST", RELAY, None, Some(batch(&["t1"])))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Service temporarily unavailable");
}

#[tokio::test]
async fn test_unparsable_body_is_failure() {
    let gateway = CountingGateway::accepting();
    let app = test_app(UNUSED_REMOTE, gateway.clone());

    let request = Request::builder()
        .method("POST")
        .uri(RELAY)
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn test_preflight_echoes_cors_headers() {
    let app = test_app(UNUSED_REMOTE, CountingGateway::accepting());

    let request = Request::builder()
        .method("OPTIONS")
        .uri(RELAY)
        .header("origin", "https://anywhere.example")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-headers"],
        "authorization, x-client-info, apikey, content-type"
    );
}

#[tokio::test]
async fn test_relay_through_expo_gateway_single_ticket() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/--/api/v2/push/send"))
        .and(header("authorization", "Bearer expo-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"status": "ok", "id": "ticket-1"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let gateway = Arc::new(ExpoGateway::new(PushConfig {
        endpoint: format!("{}/--/api/v2/push/send", server.uri()),
        access_token: Some("expo-token".to_string()),
    }));
    let app = test_app(UNUSED_REMOTE, gateway);

    let response = send(app, json_request("POST", RELAY, None, Some(batch(&["t1"])))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["totalSent"], 1);
    assert_eq!(body["successCount"], 1);
    assert_eq!(body["results"][0]["id"], "ticket-1");
}
