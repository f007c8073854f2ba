//! End-to-end session scenarios: sign-in, immediate use of the credential,
//! and the reset after a rejected credential.

mod common;

use api::{ApiError, SessionEvent};
use common::{board_json, client_for};
use store::{SlotStore, CREDENTIAL_SLOT};
use wiremock::matchers::{bearer_token, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({"email": "a@b.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "tok1",
            "user": {"id": 1, "name": "A"}
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_sign_in_populates_session_and_slot() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let (client, slots) = client_for(&server);
    let user = api::auth::sign_in(&client, "a@b.com", "secret").await.unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.name, "A");

    let snapshot = client.session().snapshot();
    assert_eq!(snapshot.user, Some(user));
    assert_eq!(snapshot.credential.as_deref(), Some("tok1"));
    assert_eq!(slots.get(CREDENTIAL_SLOT).as_deref(), Some("tok1"));
}

#[tokio::test]
async fn test_credential_usable_right_after_sign_in() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/boards"))
        .and(bearer_token("tok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([board_json("b1")])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    api::auth::sign_in(&client, "a@b.com", "secret").await.unwrap();
    let boards = api::boards::list_boards(&client).await.unwrap();

    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].id, "b1");
    // login + boards, nothing else
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_rejected_credential_after_sign_in() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/boards"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (client, slots) = client_for(&server);
    let mut nav = client.session().navigation();
    api::auth::sign_in(&client, "a@b.com", "secret").await.unwrap();

    let err = api::boards::list_boards(&client).await.unwrap_err();
    assert!(err.is_auth());

    let snapshot = client.session().snapshot();
    assert_eq!(snapshot.user, None);
    assert_eq!(snapshot.credential, None);
    assert!(slots.get(CREDENTIAL_SLOT).is_none());
    assert_eq!(nav.try_recv().unwrap(), SessionEvent::LoginRequired);
    assert!(nav.try_recv().is_err());
}

#[tokio::test]
async fn test_sign_up_signs_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "token": "tok2",
            "user": {"id": "u2", "name": "Ada", "email": "ada@example.com", "role": "member"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let user = api::auth::sign_up(&client, "Ada", "ada@example.com", "hunter22")
        .await
        .unwrap();
    assert_eq!(user.role.as_deref(), Some("member"));
    assert_eq!(client.session().credential().as_deref(), Some("tok2"));
}

#[tokio::test]
async fn test_missing_fields_send_nothing() {
    let server = MockServer::start().await;
    let (client, _) = client_for(&server);

    let err = api::auth::login(&client, "", "secret").await.unwrap_err();
    assert_eq!(err, ApiError::Validation("Email is required".into()));

    let err = api::auth::login(&client, "a@b.com", "").await.unwrap_err();
    assert_eq!(err, ApiError::Validation("Password is required".into()));

    let err = api::auth::register(&client, " ", "a@b.com", "secret").await.unwrap_err();
    assert_eq!(err, ApiError::Validation("Name is required".into()));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_login_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "tok1"})))
        .mount(&server)
        .await;

    let (client, slots) = client_for(&server);
    let err = api::auth::sign_in(&client, "a@b.com", "secret").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(!client.session().is_authenticated());
    assert!(slots.get(CREDENTIAL_SLOT).is_none());
}

#[tokio::test]
async fn test_sign_out_is_local() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let (client, slots) = client_for(&server);
    api::auth::sign_in(&client, "a@b.com", "secret").await.unwrap();
    api::auth::sign_out(client.session());

    assert!(!client.session().is_authenticated());
    assert!(slots.get(CREDENTIAL_SLOT).is_none());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
