//! Shared helpers for API integration tests.

#![allow(dead_code)]

use api::{ApiClient, ClientConfig, Session, User};
use store::MemoryStore;
use wiremock::MockServer;

/// A client pointed at `server` with an empty session over fresh storage.
pub fn client_for(server: &MockServer) -> (ApiClient, MemoryStore) {
    let slots = MemoryStore::new();
    let config = ClientConfig::new(&server.uri()).expect("mock server uri is a valid base");
    let client = ApiClient::new(config, Session::new(slots.clone()));
    (client, slots)
}

/// Same as [`client_for`] but already signed in with `token`.
pub fn signed_in_client(server: &MockServer, token: &str) -> (ApiClient, MemoryStore) {
    let (client, slots) = client_for(server);
    client.session().login(user("1", "A"), token.to_string());
    (client, slots)
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: String::new(),
        role: None,
    }
}

pub fn board_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "Roadmap",
        "ownerId": 1,
        "columns": [
            {"id": "c1", "name": "To do", "order": "todo", "tasks": [
                {"id": "t1", "title": "Draft", "description": "", "columnId": "c1", "createdAt": "2024-05-01T10:00:00Z"}
            ]},
            {"id": "c2", "name": "In progress", "order": "in-progress", "tasks": []},
            {"id": "c3", "name": "Done", "order": "done", "tasks": []}
        ]
    })
}
