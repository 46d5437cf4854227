//! Chats domain integration tests: orchestration, rollback, ownership

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use chatline_chats::ChatSession;
use chatline_llm::MockLlmService;

use crate::common::{api_request, parse_body, TestApp};

#[tokio::test]
async fn test_send_message_without_session_creates_one() {
    let app = TestApp::new().await.unwrap();
    let (user, token) = app.create_test_user().await.unwrap();

    let resp = app
        .router()
        .oneshot(api_request(
            Method::POST,
            "/v1/chat/messages",
            Some(&token),
            Some(json!({"content": "hello"})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = parse_body(resp).await;
    let session_id = Uuid::parse_str(body["session"]["id"].as_str().unwrap()).unwrap();

    assert_eq!(app.session_count(user.id).await.unwrap(), 1);
    assert_eq!(app.message_count(session_id).await.unwrap(), 2);
    assert_eq!(body["user_message"]["role"], "user");
    assert_eq!(body["assistant_message"]["role"], "assistant");

    app.remove_user(user.id).await.unwrap();
}

#[tokio::test]
async fn test_send_whitespace_message_persists_nothing() {
    let app = TestApp::new().await.unwrap();
    let (user, token) = app.create_test_user().await.unwrap();

    let resp = app
        .router()
        .oneshot(api_request(
            Method::POST,
            "/v1/chat/messages",
            Some(&token),
            Some(json!({"content": "   \t  "})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // No session was created, so nothing was stored at all
    assert_eq!(app.session_count(user.id).await.unwrap(), 0);

    app.remove_user(user.id).await.unwrap();
}

#[tokio::test]
async fn test_failed_completion_removes_user_message() {
    let app = TestApp::new().await.unwrap();
    let (user, token) = app.create_test_user().await.unwrap();

    let session = app
        .chats_repos()
        .sessions
        .create(&ChatSession::new(user.id))
        .await
        .unwrap();
    let count_before = app.message_count(session.id).await.unwrap();

    let resp = app
        .router_with_llm(Arc::new(MockLlmService::failing()))
        .oneshot(api_request(
            Method::POST,
            "/v1/chat/messages",
            Some(&token),
            Some(json!({"content": "hello", "chat_session_id": session.id})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The just-stored user message was compensatingly deleted
    assert_eq!(app.message_count(session.id).await.unwrap(), count_before);

    app.remove_user(user.id).await.unwrap();
}

#[tokio::test]
async fn test_delete_session_of_other_user_not_found() {
    let app = TestApp::new().await.unwrap();
    let (owner, _) = app.create_test_user().await.unwrap();
    let (intruder, intruder_token) = app.create_test_user().await.unwrap();

    let session = app
        .chats_repos()
        .sessions
        .create(&ChatSession::new(owner.id))
        .await
        .unwrap();

    let resp = app
        .router()
        .oneshot(api_request(
            Method::DELETE,
            &format!("/v1/chat/sessions/{}", session.id),
            Some(&intruder_token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(app.session_exists(session.id).await.unwrap());

    app.remove_user(owner.id).await.unwrap();
    app.remove_user(intruder.id).await.unwrap();
}

#[tokio::test]
async fn test_register_login_message_delete_scenario() {
    let app = TestApp::new().await.unwrap();
    let email = format!("ann_{}@chatline.test", Uuid::new_v4().simple());

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
    assert_eq!(register.status(), StatusCode::CREATED);
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
    let token = parse_body(login).await["token"].as_str().unwrap().to_string();

    // A fresh login has no sessions; sending without a session id creates one
    let send = app
        .router()
        .oneshot(api_request(
            Method::POST,
            "/v1/chat/messages",
            Some(&token),
            Some(json!({"content": "hello"})),
        ))
        .await
        .unwrap();
    assert_eq!(send.status(), StatusCode::CREATED);
    let exchange = parse_body(send).await;

    assert!(exchange["user_message"]["content"]
        .as_str()
        .unwrap()
        .contains("hello"));
    assert_eq!(exchange["assistant_message"]["role"], "assistant");
    let session_id = exchange["session"]["id"].as_str().unwrap().to_string();

    let delete = app
        .router()
        .oneshot(api_request(
            Method::DELETE,
            &format!("/v1/chat/sessions/{}", session_id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    let view = app
        .router()
        .oneshot(api_request(Method::GET, "/v1/chat", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(view.status(), StatusCode::OK);
    let body = parse_body(view).await;
    assert_eq!(body["sessions"].as_array().unwrap().len(), 0);
    assert!(body["current"].is_null());

    app.remove_user(user_id).await.unwrap();
}
