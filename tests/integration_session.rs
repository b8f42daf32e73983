use schoolhub::session::SchoolClient;
use schoolhub_config::RemoteConfig;
use schoolhub_models::Section;
use schoolhub_remote::RemoteClient;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> SchoolClient {
    SchoolClient::new(RemoteClient::new(RemoteConfig::new(server.uri(), "anon-key")))
}

async fn mock_admin_sign_in(server: &MockServer, id: Uuid) {
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "admin-token",
            "refresh_token": "r",
            "expires_in": 3600,
            "user": {"id": id, "email": "head@school.test"}
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(header("authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": id, "email": "head@school.test", "name": "Head", "role": "admin"
        }])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_logout_lifecycle() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    mock_admin_sign_in(&server, id).await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client(&server);
    assert!(client.state().is_loading());

    assert_eq!(client.start(None).await.unwrap(), None);
    assert!(!client.state().is_loading());
    assert_eq!(client.section(), Section::Login);

    assert_eq!(
        client.login("head@school.test", "pw").await.unwrap(),
        Some(Section::Admin)
    );
    assert!(client.state().is_authenticated());
    assert_eq!(client.state().user().map(|u| u.id), Some(id));

    // Wandering into another section bounces back home once
    assert_eq!(client.navigate(Section::Student), Some(Section::Admin));
    assert_eq!(client.section(), Section::Admin);

    assert_eq!(client.logout().await, Some(Section::Login));
    assert!(!client.state().is_authenticated());
    assert!(client.state().user().is_none());
}

#[tokio::test]
async fn test_rejected_stored_token_resolves_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "msg": "invalid JWT: token is expired"
        })))
        .mount(&server)
        .await;

    let mut client = client(&server);
    let redirect = client.start(Some("stale-token".to_string())).await.unwrap();

    assert_eq!(redirect, None);
    assert!(!client.state().is_loading());
    assert!(!client.state().is_authenticated());
}

#[tokio::test]
async fn test_restored_session_redirects_home() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": id})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(header("authorization", "Bearer stored-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": id, "email": "t@school.test", "name": "T", "role": "teacher"
        }])))
        .mount(&server)
        .await;

    let mut client = client(&server);
    let redirect = client.start(Some("stored-token".to_string())).await.unwrap();

    assert_eq!(redirect, Some(Section::Teacher));
    assert_eq!(client.section(), Section::Teacher);
}

#[tokio::test]
async fn test_failed_restore_still_ends_loading() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": id})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "db down"})))
        .mount(&server)
        .await;

    let mut client = client(&server);
    let result = client.start(Some("stored".to_string())).await;

    assert!(result.is_err());
    assert!(!client.state().is_loading());
    assert!(!client.state().is_authenticated());
    assert_eq!(client.section(), Section::Login);

    // Loading never comes back on later navigation
    assert_eq!(client.navigate(Section::Admin), Some(Section::Login));
    assert!(!client.state().is_loading());
}

#[tokio::test]
async fn test_logout_redirects_even_when_revoke_fails() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    mock_admin_sign_in(&server, id).await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"msg": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client(&server);
    client.start(None).await.unwrap();
    client.login("head@school.test", "pw").await.unwrap();

    assert_eq!(client.logout().await, Some(Section::Login));
    assert!(!client.state().is_authenticated());
    assert_eq!(client.section(), Section::Login);
}
