//! End-to-end flows against a live PostgreSQL instance.
//!
//! Run with `cargo test -- --ignored` and `CLINIC_TEST_DATABASE_URL`
//! pointing at a scratch database.

mod common;

use http::StatusCode;

#[tokio::test]
#[ignore]
async fn test_register_login_flow() {
    let app = common::TestApp::new().await;

    let register_token = app
        .register("Alice", "alice@flow.test", "password123", "USER")
        .await;
    assert!(!register_token.is_empty());

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "alice@flow.test",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("email").unwrap(), "alice@flow.test");
    assert!(response.body.get("token").is_some());
}

#[tokio::test]
#[ignore]
async fn test_login_wrong_password_and_unknown_user_look_identical() {
    let app = common::TestApp::new().await;
    app.register("Bob", "bob@flow.test", "password123", "USER")
        .await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "bob@flow.test",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@flow.test",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        wrong_password.body.get("message"),
        unknown_user.body.get("message")
    );
}

#[tokio::test]
#[ignore]
async fn test_duplicate_email_is_a_conflict() {
    let app = common::TestApp::new().await;
    app.register("Carol", "carol@flow.test", "password123", "USER")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Carol Again",
                "email": "carol@flow.test",
                "password": "password456",
                "role": "USER",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore]
async fn test_addrole_reassigns_the_callers_own_account() {
    let app = common::TestApp::new().await;
    let token = app
        .register("Dave", "dave@flow.test", "password123", "USER")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/user/addrole",
            Some(serde_json::json!({ "newRole": "ADMIN" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("email").unwrap(), "dave@flow.test");
    assert_eq!(response.body.get("role").unwrap(), "ADMIN");

    // The old token still carries USER; a re-login picks up the new role.
    let demo = app
        .request("GET", "/api/protected/admin_demo", None, Some(&token))
        .await;
    assert_eq!(demo.status, StatusCode::FORBIDDEN);

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "dave@flow.test",
                "password": "password123",
            })),
            None,
        )
        .await;
    let token = login.body.get("token").unwrap().as_str().unwrap().to_string();

    let demo = app
        .request("GET", "/api/protected/admin_demo", None, Some(&token))
        .await;
    assert_eq!(demo.status, StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_addrole_cannot_target_another_account() {
    let app = common::TestApp::new().await;
    app.register("Eve", "eve@flow.test", "password123", "USER")
        .await;
    let mallory = app
        .register("Mallory", "mallory@flow.test", "password123", "USER")
        .await;

    // An email in the body is ignored; only the caller's row changes.
    let response = app
        .request(
            "POST",
            "/api/auth/user/addrole",
            Some(serde_json::json!({
                "email": "eve@flow.test",
                "newRole": "ADMIN",
            })),
            Some(&mallory),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("email").unwrap(), "mallory@flow.test");

    let eve: (String,) =
        sqlx::query_as("SELECT r.role_type::text FROM users u JOIN roles r ON r.id = u.role_id WHERE u.email = 'eve@flow.test'")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(eve.0, "USER");
}
