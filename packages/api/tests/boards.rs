//! Integration tests for the board and task wrappers.

mod common;

use api::{ApiError, NewTask, TaskPatch};
use common::{board_json, signed_in_client};
use store::ColumnStage;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_board() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&server)
        .await;

    let (client, _) = signed_in_client(&server, "tok1");
    let board = api::boards::get_board(&client, "b1").await.unwrap();
    assert_eq!(board.owner_id.as_deref(), Some("1"));
    assert_eq!(board.column_for_stage(ColumnStage::Todo).unwrap().tasks.len(), 1);
}

#[tokio::test]
async fn test_create_board() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/boards"))
        .and(body_json(serde_json::json!({"name": "Roadmap"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(board_json("b9")))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = signed_in_client(&server, "tok1");
    let board = api::boards::create_board(&client, "Roadmap").await.unwrap();
    assert_eq!(board.id, "b9");
}

#[tokio::test]
async fn test_create_task_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/boards/b1/tasks"))
        .and(body_json(serde_json::json!({
            "title": "Ship it",
            "description": "before friday",
            "columnId": "c1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 55,
            "title": "Ship it",
            "description": "before friday",
            "columnId": "c1",
            "createdAt": "2024-05-02T09:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = signed_in_client(&server, "tok1");
    let task = api::boards::create_task(
        &client,
        "b1",
        &NewTask {
            title: "Ship it".into(),
            description: "before friday".into(),
            column_id: "c1".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(task.id, "55");
    assert_eq!(task.created_at.as_deref(), Some("2024-05-02T09:00:00Z"));
}

#[tokio::test]
async fn test_move_task_sends_only_column() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/tasks/t1"))
        .and(body_json(serde_json::json!({"columnId": "c2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "t1",
            "title": "Draft",
            "columnId": "c2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = signed_in_client(&server, "tok1");
    let task = api::boards::move_task(&client, "t1", "c2").await.unwrap();
    assert_eq!(task.column_id, "c2");
}

#[tokio::test]
async fn test_delete_task_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/tasks/t1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = signed_in_client(&server, "tok1");
    api::boards::delete_task(&client, "t1").await.unwrap();
}

#[tokio::test]
async fn test_invalid_requests_send_nothing() {
    let server = MockServer::start().await;
    let (client, _) = signed_in_client(&server, "tok1");

    let err = api::boards::create_board(&client, "  ").await.unwrap_err();
    assert_eq!(err, ApiError::Validation("Board name is required".into()));

    let err = api::boards::update_task(&client, "t1", &TaskPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let empty_title = NewTask {
        title: String::new(),
        description: String::new(),
        column_id: "c1".into(),
    };
    let err = api::boards::create_task(&client, "b1", &empty_title).await.unwrap_err();
    assert_eq!(err, ApiError::Validation("Title is required".into()));

    let err = api::boards::get_board(&client, "../admin").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}
