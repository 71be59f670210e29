//! End-to-end HTTP tests: real server on an ephemeral port, in-memory
//! stores, reqwest client. The router is the same one `main.rs` serves.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use sitedesk_api::app::{self, services::AppServices};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let services = Arc::new(AppServices::in_memory());
        let app = app::build_app(services);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_user(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    email: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/users", base_url))
        .json(&json!({ "name": name, "email": email }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/users", srv.base_url))
        .send()
        .await
        .unwrap();
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn create_user_returns_the_stored_row() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_user(&client, &srv.base_url, "Ada", "ada@example.com").await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert_eq!(body["data"]["name"], "Ada");
    assert!(body["data"]["id"].is_i64());
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn duplicate_email_is_rejected_without_inserting() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let first = create_user(&client, &srv.base_url, "Ada", "ada@example.com").await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = create_user(&client, &srv.base_url, "Imposter", "ada@example.com").await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email already exists");
    assert!(body.get("data").is_none());

    // Row count unchanged.
    let list: serde_json::Value = client
        .get(format!("{}/users", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_user_is_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/users/999", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn non_numeric_id_behaves_like_a_miss() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/users/not-a-number", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_changes_the_row_and_guards_email_uniqueness() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let ada: serde_json::Value = create_user(&client, &srv.base_url, "Ada", "ada@example.com")
        .await
        .json()
        .await
        .unwrap();
    let bob: serde_json::Value = create_user(&client, &srv.base_url, "Bob", "bob@example.com")
        .await
        .json()
        .await
        .unwrap();
    let bob_id = bob["data"]["id"].as_i64().unwrap();

    // Renaming while keeping one's own email is fine.
    let res = client
        .put(format!("{}/users/{}", srv.base_url, bob_id))
        .json(&json!({ "name": "Robert", "email": "bob@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Robert");

    // Taking another user's email is not.
    let res = client
        .put(format!("{}/users/{}", srv.base_url, bob_id))
        .json(&json!({ "name": "Robert", "email": "ada@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Email already exists");

    // The target row is unchanged by the failed update.
    let check: serde_json::Value = client
        .get(format!("{}/users/{}", srv.base_url, bob_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(check["data"]["email"], "bob@example.com");

    // So is the other user.
    let ada_id = ada["data"]["id"].as_i64().unwrap();
    let check: serde_json::Value = client
        .get(format!("{}/users/{}", srv.base_url, ada_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(check["data"]["email"], "ada@example.com");
}

#[tokio::test]
async fn update_missing_user_is_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/users/999", srv.base_url))
        .json(&json!({ "name": "Ghost", "email": "ghost@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let ada: serde_json::Value = create_user(&client, &srv.base_url, "Ada", "ada@example.com")
        .await
        .json()
        .await
        .unwrap();
    let id = ada["data"]["id"].as_i64().unwrap();

    let res = client
        .delete(format!("{}/users/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(res.text().await.unwrap(), "");

    let res = client
        .get(format!("{}/users/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Deleting again is also a miss.
    let res = client
        .delete(format!("{}/users/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn users_list_newest_first() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for (name, email) in [
        ("A", "a@example.com"),
        ("B", "b@example.com"),
        ("C", "c@example.com"),
    ] {
        create_user(&client, &srv.base_url, name, email).await;
    }

    let body: serde_json::Value = client
        .get(format!("{}/users", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let emails: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec!["c@example.com", "b@example.com", "a@example.com"]);
}

#[tokio::test]
async fn malformed_body_is_rejected_with_the_envelope() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Not JSON at all.
    let res = client
        .post(format!("{}/users", srv.base_url))
        .header("content-type", "application/json")
        .body("{ definitely not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(!body["message"].as_str().unwrap().is_empty());

    // Missing a required field.
    let res = client
        .post(format!("{}/users", srv.base_url))
        .json(&json!({ "name": "Ada" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_required_field_names_the_field() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_user(&client, &srv.base_url, "   ", "ada@example.com").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "name is required");
}

#[tokio::test]
async fn contact_with_required_fields_only() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/contact", srv.base_url))
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Interested in a demo",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["message"], "Interested in a demo");
    assert!(body["data"]["phone"].is_null());
    assert!(body["data"]["company"].is_null());
}

#[tokio::test]
async fn contact_missing_message_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/contact", srv.base_url))
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "  ",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "message is required");
}

#[tokio::test]
async fn contacts_list_newest_first_with_optionals() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/contact", srv.base_url))
        .json(&json!({
            "name": "First",
            "email": "first@example.com",
            "message": "hello",
        }))
        .send()
        .await
        .unwrap();
    client
        .post(format!("{}/contact", srv.base_url))
        .json(&json!({
            "name": "Second",
            "email": "second@example.com",
            "message": "hi",
            "phone": "+44 20 7946 0000",
            "company": "Acme",
        }))
        .send()
        .await
        .unwrap();

    let body: serde_json::Value = client
        .get(format!("{}/contacts", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Second");
    assert_eq!(rows[0]["company"], "Acme");
    assert_eq!(rows[1]["name"], "First");
    assert!(rows[1]["phone"].is_null());
}
