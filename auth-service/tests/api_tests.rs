mod common;

use auth::Claims;
use auth::TokenService;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use common::JWT_SECRET;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .json(&json!({ "email": "a@x.com", "password": "p1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "User created successfully");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.post("/register")
        .json(&json!({ "email": "a@x.com", "password": "p1" }))
        .send()
        .await
        .expect("Failed to execute request");

    // Same email again, different password: still a duplicate.
    let response = app
        .post("/register")
        .json(&json!({ "email": "a@x.com", "password": "other" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .json(&json!({ "email": "not-an-email", "password": "p1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::spawn().await;

    app.post("/register")
        .json(&json!({ "email": "a@x.com", "password": "p1" }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/login")
        .json(&json!({ "email": "a@x.com", "password": "p1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["token_type"], "bearer");

    // The token is valid for the configured 60 minutes.
    let token = body["access_token"].as_str().expect("Missing access_token");
    let claims = TokenService::new(JWT_SECRET)
        .verify(token)
        .expect("Issued token failed verification");
    assert_eq!(claims.sub, "a@x.com");
    let now = Utc::now().timestamp();
    assert!(claims.exp > now + 59 * 60 && claims.exp <= now + 60 * 60 + 1);
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let app = TestApp::spawn().await;

    app.post("/register")
        .json(&json!({ "email": "a@x.com", "password": "p1" }))
        .send()
        .await
        .expect("Failed to execute request");

    let wrong_password = app
        .post("/login")
        .json(&json!({ "email": "a@x.com", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to execute request");

    let unknown_email = app
        .post("/login")
        .json(&json!({ "email": "nobody@x.com", "password": "p1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(
        wrong_password
            .headers()
            .get("www-authenticate")
            .map(|v| v.to_str().unwrap().to_string()),
        Some("Bearer".to_string())
    );

    // Identical bodies: no way to tell unknown email from wrong password.
    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_email: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["error"], "Incorrect email or password");
}

#[tokio::test]
async fn test_current_user_with_valid_token() {
    let app = TestApp::spawn().await;

    app.post("/register")
        .json(&json!({ "email": "a@x.com", "password": "p1" }))
        .send()
        .await
        .expect("Failed to execute request");

    let login: serde_json::Value = app
        .post("/login")
        .json(&json!({ "email": "a@x.com", "password": "p1" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    let token = login["access_token"].as_str().expect("Missing token");

    let response = app
        .get_authenticated("/users/me", token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], "a@x.com");
}

#[tokio::test]
async fn test_current_user_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get("www-authenticate")
            .map(|v| v.to_str().unwrap()),
        Some("Bearer")
    );
}

#[tokio::test]
async fn test_current_user_with_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/users/me", "not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_user_with_expired_token() {
    let app = TestApp::spawn().await;

    app.post("/register")
        .json(&json!({ "email": "a@x.com", "password": "p1" }))
        .send()
        .await
        .expect("Failed to execute request");

    // Mint a token with the app's secret that expired an hour ago.
    let tokens = TokenService::new(JWT_SECRET);
    let issued_at = Utc::now() - Duration::hours(2);
    let expired = tokens
        .encode(&Claims::new("a@x.com", issued_at, Duration::hours(1)))
        .expect("Failed to encode token");

    let response = app
        .get_authenticated("/users/me", &expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_user_for_deleted_account() {
    let app = TestApp::spawn().await;

    // Valid token whose subject was never registered.
    let token = TokenService::new(JWT_SECRET)
        .issue("ghost@x.com", Duration::minutes(60))
        .expect("Failed to issue token");

    let response = app
        .get_authenticated("/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}
