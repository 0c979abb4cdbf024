// Integration tests for `DirectoryClient` using wiremock.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storefront_api::directory::types::UserWriteBody;
use storefront_api::{DirectoryClient, Error, Session};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DirectoryClient) {
    let server = MockServer::start().await;
    let client = DirectoryClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn user_body(id: i64, name: &str, username: &str, email: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "username": username,
        "email": email,
        "phone": "1-770-736-8031",
        "website": "hildegard.org",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_users() {
    let (server, client) = setup().await;

    let body = json!([
        user_body(1, "Leanne Graham", "Bret", "Sincere@april.biz"),
        user_body(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
    ]);

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let users = client.list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(users[1].username, "Antonette");
    assert_eq!(
        users[0].company.as_ref().unwrap().catch_phrase,
        "Multi-layered client-server neural-net"
    );
}

#[tokio::test]
async fn test_get_user() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(user_body(3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net")),
        )
        .mount(&server)
        .await;

    let user = client.get_user("3").await.unwrap();

    assert_eq!(user.id, 3);
    assert_eq!(user.email, "Nathan@yesenia.net");
    assert_eq!(user.address.as_ref().unwrap().city, "Gwenborough");
}

#[tokio::test]
async fn test_create_user_echoes_partial_body() {
    let (server, client) = setup().await;

    // The fake upstream echoes only what it received plus an id.
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_partial_json(json!({ "name": "Ada Lovelace" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "username": "ada"
        })))
        .mount(&server)
        .await;

    let body = UserWriteBody {
        name: Some("Ada Lovelace".into()),
        email: Some("ada@example.com".into()),
        username: Some("ada".into()),
    };

    let created = client.create_user(&body).await.unwrap();

    assert_eq!(created.id, 11);
    assert_eq!(created.name, "Ada Lovelace");
    // Fields the echo omitted deserialize to their defaults.
    assert!(created.address.is_none());
    assert!(created.company.is_none());
}

#[tokio::test]
async fn test_update_user_tolerates_minimal_echo() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/users/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5 })))
        .mount(&server)
        .await;

    let updated = client
        .update_user("5", &UserWriteBody::default())
        .await
        .unwrap();

    assert_eq!(updated.id, 5);
    assert!(updated.name.is_empty());
    assert!(updated.email.is_empty());
}

#[tokio::test]
async fn test_delete_user() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/users/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    client.delete_user("5").await.unwrap();
}

#[tokio::test]
async fn test_get_profile_fetches_fixed_record() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(user_body(1, "Leanne Graham", "Bret", "Sincere@april.biz")),
        )
        .mount(&server)
        .await;

    let profile = client.get_profile().await.unwrap();
    assert_eq!(profile.id, 1);
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_404_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = client.get_user("99").await;

    match result {
        Err(err) => {
            assert!(err.is_not_found(), "expected not-found, got: {err:?}");
            assert_eq!(err.status(), Some(404));
        }
        other => panic!("expected Http 404 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_500_uses_message_field() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database on fire" })),
        )
        .mount(&server)
        .await;

    let result = client.list_users().await;

    match result {
        Err(Error::Http {
            status,
            ref message,
        }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database on fire");
        }
        other => panic!("expected Http 500 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_401_clears_session() {
    let server = MockServer::start().await;
    let session = Arc::new(Session::new(SecretString::from("tok".to_owned())));
    let client = DirectoryClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .unwrap()
        .with_session(Arc::clone(&session));

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_users().await;

    assert!(matches!(result, Err(Error::SessionExpired)));
    assert!(!session.is_authenticated(), "401 must clear the token");
}

#[tokio::test]
async fn test_error_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>"))
        .mount(&server)
        .await;

    let result = client.list_users().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("doctype"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
