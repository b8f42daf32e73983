mod common;

use axum::http::StatusCode;
use common::{CountingGateway, body_json, json_request, mint_token, send, test_app};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn teacher_row(name: &str) -> serde_json::Value {
    json!({
        "id": Uuid::new_v4(),
        "user_id": null,
        "name": name,
        "email": format!("{}@school.test", name.to_lowercase().replace(' ', ".")),
        "subject": "Chemistry",
        "phone": null,
        "qualification": "MSc",
        "created_at": "2025-01-06T08:00:00Z"
    })
}

#[tokio::test]
async fn test_list_is_ordered_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/teachers"))
        .and(query_param("order", "name.asc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([teacher_row("Ada Eze"), teacher_row("Bola Ade")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = mint_token(Uuid::new_v4(), Some("student"));
    let app = test_app(&server.uri(), CountingGateway::accepting());
    let response = send(app, json_request("GET", "/api/teachers", Some(&token), None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["name"], "Ada Eze");
    assert_eq!(body[1]["name"], "Bola Ade");
}

#[tokio::test]
async fn test_admin_creates_teacher() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/teachers"))
        .and(body_partial_json(json!({"name": "Ada Eze", "subject": "Chemistry"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([teacher_row("Ada Eze")])))
        .expect(1)
        .mount(&server)
        .await;

    let token = mint_token(Uuid::new_v4(), Some("admin"));
    let app = test_app(&server.uri(), CountingGateway::accepting());
    let body = json!({"name": "Ada Eze", "email": "ada.eze@school.test", "subject": "Chemistry"});
    let response = send(app, json_request("POST", "/api/teachers", Some(&token), Some(body))).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["name"], "Ada Eze");
}

#[tokio::test]
async fn test_teacher_cannot_write_directory() {
    let server = MockServer::start().await;
    let token = mint_token(Uuid::new_v4(), Some("teacher"));
    let app = test_app(&server.uri(), CountingGateway::accepting());
    let id = Uuid::new_v4();

    let create = json!({"name": "Ada Eze", "email": "ada.eze@school.test"});
    let response = send(
        app.clone(),
        json_request("POST", "/api/teachers", Some(&token), Some(create)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(
        app.clone(),
        json_request(
            "PUT",
            &format!("/api/teachers/{}", id),
            Some(&token),
            Some(json!({"phone": "08035550101"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(
        app,
        json_request("DELETE", &format!("/api/teachers/{}", id), Some(&token), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_teacher_is_not_found() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/teachers"))
        .and(query_param("id", format!("eq.{}", id).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let token = mint_token(Uuid::new_v4(), Some("admin"));
    let app = test_app(&server.uri(), CountingGateway::accepting());
    let response = send(
        app,
        json_request("DELETE", &format!("/api/teachers/{}", id), Some(&token), None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_existing_teacher_is_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/teachers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([teacher_row("Ada Eze")])))
        .mount(&server)
        .await;

    let token = mint_token(Uuid::new_v4(), Some("admin"));
    let app = test_app(&server.uri(), CountingGateway::accepting());
    let response = send(
        app,
        json_request("DELETE", &format!("/api/teachers/{}", Uuid::new_v4()), Some(&token), None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
