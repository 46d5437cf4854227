//! Accounts domain integration tests: registration, login, user store

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{api_request, parse_body, TestApp};

fn unique_email() -> String {
    format!("test_{}@chatline.test", Uuid::new_v4().simple())
}

#[tokio::test]
async fn test_register_returns_created_user() {
    let app = TestApp::new().await.unwrap();
    let email = unique_email();

    let req = api_request(
        Method::POST,
        "/v1/auth/register",
        None,
        Some(json!({"username": "ann", "email": email, "password": "secret1"})),
    );

    let resp = app.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = parse_body(resp).await;
    assert_eq!(body["username"], "ann");
    assert_eq!(body["email"], email);
    assert!(body.get("password_hash").is_none());

    let user_id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();
    app.remove_user(user_id).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_registration_conflicts_without_second_row() {
    let app = TestApp::new().await.unwrap();
    let email = unique_email();
    let payload = json!({"username": "ann", "email": email, "password": "secret1"});

    let first = app
        .router()
        .oneshot(api_request(
            Method::POST,
            "/v1/auth/register",
            None,
            Some(payload.clone()),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let body = parse_body(first).await;
    let user_id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();

    let second = app
        .router()
        .oneshot(api_request(
            Method::POST,
            "/v1/auth/register",
            None,
            Some(payload),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let rows = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    app.remove_user(user_id).await.unwrap();
}

#[tokio::test]
async fn test_login_roundtrip_token_authenticates() {
    let app = TestApp::new().await.unwrap();
    let email = unique_email();

    let register = app
        .router()
        .oneshot(api_request(
            Method::POST,
            "/v1/auth/register",
            None,
            Some(json!({"username": "ann", "email": email, "password": "secret1"})),
        ))
        .await
        .unwrap();
    let registered = parse_body(register).await;
    let user_id = Uuid::parse_str(registered["id"].as_str().unwrap()).unwrap();

    let login = app
        .router()
        .oneshot(api_request(
            Method::POST,
            "/v1/auth/login",
            None,
            Some(json!({"email": email, "password": "secret1"})),
        ))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);

    let body = parse_body(login).await;
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(body["user"]["id"], registered["id"]);

    // The issued token works against an authenticated route
    let chat = app
        .router()
        .oneshot(api_request(Method::GET, "/v1/chat", Some(token), None))
        .await
        .unwrap();
    assert_eq!(chat.status(), StatusCode::OK);

    app.remove_user(user_id).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let app = TestApp::new().await.unwrap();
    let (user, _) = app.create_test_user().await.unwrap();

    let login = app
        .router()
        .oneshot(api_request(
            Method::POST,
            "/v1/auth/login",
            None,
            Some(json!({"email": user.email, "password": "wrong-password"})),
        ))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::UNAUTHORIZED);

    app.remove_user(user.id).await.unwrap();
}

#[tokio::test]
async fn test_user_repository_update() {
    let app = TestApp::new().await.unwrap();
    let (user, _) = app.create_test_user().await.unwrap();
    let repos = app.accounts_repos();

    let mut changed = user.clone();
    changed.username = "renamed".to_string();

    let updated = repos.users.update(&changed).await.unwrap().unwrap();
    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.email, user.email);

    let found = repos.users.find(user.id).await.unwrap().unwrap();
    assert_eq!(found.username, "renamed");

    // Updating a nonexistent user touches nothing
    let mut ghost = user.clone();
    ghost.id = Uuid::new_v4();
    assert!(repos.users.update(&ghost).await.unwrap().is_none());

    app.remove_user(user.id).await.unwrap();
}
