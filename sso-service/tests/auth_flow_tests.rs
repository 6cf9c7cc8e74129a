mod common;

use auth::TokenCodec;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use common::APP_ID;
use common::APP_REFRESH_SECRET;
use common::APP_SECRET;
use sso_service::domain::auth::errors::AuthError;
use sso_service::domain::auth::models::AppId;
use sso_service::domain::auth::models::EmailAddress;
use sso_service::domain::auth::models::RegisterCommand;
use sso_service::domain::auth::models::UserId;
use sso_service::domain::auth::ports::AuthServicePort;

fn register_command(email: &str, password: &str, name: &str) -> RegisterCommand {
    RegisterCommand {
        email: EmailAddress::new(email.to_string()).unwrap(),
        password: password.to_string(),
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_register_then_login_round_trip() {
    let app = TestApp::spawn();

    let user_id = app
        .service
        .register(register_command("a@b.com", "pw12345", "Alice"))
        .await
        .unwrap();

    let login_time = Utc::now().timestamp();
    let tokens = app
        .service
        .login("a@b.com", "pw12345", AppId(APP_ID))
        .await
        .unwrap();

    let codec = TokenCodec::new();
    let access = codec.validate(&tokens.access_token, APP_SECRET).unwrap();
    let refresh = codec
        .validate(&tokens.refresh_token, APP_REFRESH_SECRET)
        .unwrap();

    assert_eq!(access.user_id, user_id.0);
    assert_eq!(access.app_id, APP_ID);
    assert_eq!(refresh.user_id, user_id.0);
    assert_eq!(refresh.app_id, APP_ID);

    const DELTA_SECONDS: i64 = 2;
    assert!((access.exp - (login_time + 600)).abs() <= DELTA_SECONDS);
    assert!((refresh.exp - (login_time + 3600)).abs() <= DELTA_SECONDS);
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let app = TestApp::spawn();

    app.service
        .register(register_command("a@b.com", "pw12345", "Alice"))
        .await
        .unwrap();

    let second = app
        .service
        .register(register_command("a@b.com", "other_password", "Impostor"))
        .await;
    assert!(matches!(second, Err(AuthError::AlreadyRegistered)));

    // The first registration is unaffected.
    app.service
        .login("a@b.com", "pw12345", AppId(APP_ID))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn();

    app.service
        .register(register_command("a@b.com", "pw12345", "Alice"))
        .await
        .unwrap();

    let unknown_email = app
        .service
        .login("nobody@b.com", "pw12345", AppId(APP_ID))
        .await;
    let wrong_password = app
        .service
        .login("a@b.com", "wrong_password", AppId(APP_ID))
        .await;

    assert!(matches!(unknown_email, Err(AuthError::InvalidCredentials)));
    assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn test_refresh_rotates_pair_and_preserves_subject() {
    let app = TestApp::spawn();

    let user_id = app
        .service
        .register(register_command("a@b.com", "pw12345", "Alice"))
        .await
        .unwrap();

    let tokens = app
        .service
        .login("a@b.com", "pw12345", AppId(APP_ID))
        .await
        .unwrap();

    // Let the clock tick so the reissued tokens carry fresh timestamps.
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let rotated = app
        .service
        .refresh_token(&tokens.refresh_token, AppId(APP_ID))
        .await
        .unwrap();

    assert_ne!(rotated.access_token, tokens.access_token);

    let codec = TokenCodec::new();
    let access = codec.validate(&rotated.access_token, APP_SECRET).unwrap();
    let refresh = codec
        .validate(&rotated.refresh_token, APP_REFRESH_SECRET)
        .unwrap();
    assert_eq!(access.user_id, user_id.0);
    assert_eq!(refresh.user_id, user_id.0);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::spawn();

    app.service
        .register(register_command("a@b.com", "pw12345", "Alice"))
        .await
        .unwrap();
    let tokens = app
        .service
        .login("a@b.com", "pw12345", AppId(APP_ID))
        .await
        .unwrap();

    let result = app
        .service
        .refresh_token(&tokens.access_token, AppId(APP_ID))
        .await;
    assert!(matches!(result, Err(AuthError::Unauthorized)));
}

#[tokio::test]
async fn test_refresh_rejects_tampered_token() {
    let app = TestApp::spawn();

    app.service
        .register(register_command("a@b.com", "pw12345", "Alice"))
        .await
        .unwrap();
    let tokens = app
        .service
        .login("a@b.com", "pw12345", AppId(APP_ID))
        .await
        .unwrap();

    // Flip a character inside the payload segment.
    let mut parts: Vec<String> = tokens
        .refresh_token
        .split('.')
        .map(str::to_string)
        .collect();
    let payload = parts[1].clone();
    let replacement = if payload.starts_with('A') { "B" } else { "A" };
    parts[1] = format!("{}{}", replacement, &payload[1..]);
    let tampered = parts.join(".");

    let result = app.service.refresh_token(&tampered, AppId(APP_ID)).await;
    assert!(matches!(result, Err(AuthError::Unauthorized)));
}

#[tokio::test]
async fn test_current_user_returns_public_projection() {
    let app = TestApp::spawn();

    let user_id = app
        .service
        .register(register_command("a@b.com", "pw12345", "Alice"))
        .await
        .unwrap();
    let tokens = app
        .service
        .login("a@b.com", "pw12345", AppId(APP_ID))
        .await
        .unwrap();

    let user = app
        .service
        .current_user(&tokens.access_token, AppId(APP_ID))
        .await
        .unwrap();

    assert_eq!(user.id, user_id);
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name, "Alice");
}

#[tokio::test]
async fn test_current_user_rejects_refresh_token() {
    let app = TestApp::spawn();

    app.service
        .register(register_command("a@b.com", "pw12345", "Alice"))
        .await
        .unwrap();
    let tokens = app
        .service
        .login("a@b.com", "pw12345", AppId(APP_ID))
        .await
        .unwrap();

    let result = app
        .service
        .current_user(&tokens.refresh_token, AppId(APP_ID))
        .await;
    assert!(matches!(result, Err(AuthError::Unauthorized)));
}

#[tokio::test]
async fn test_expired_access_token_rejected() {
    // Issue tokens that are already past their expiry.
    let app = TestApp::with_ttls(Duration::seconds(-60), Duration::hours(1));

    app.service
        .register(register_command("a@b.com", "pw12345", "Alice"))
        .await
        .unwrap();
    let tokens = app
        .service
        .login("a@b.com", "pw12345", AppId(APP_ID))
        .await
        .unwrap();

    let result = app
        .service
        .current_user(&tokens.access_token, AppId(APP_ID))
        .await;
    assert!(matches!(result, Err(AuthError::Unauthorized)));
}

#[tokio::test]
async fn test_login_with_unknown_tenant() {
    let app = TestApp::spawn();

    app.service
        .register(register_command("a@b.com", "pw12345", "Alice"))
        .await
        .unwrap();

    let result = app.service.login("a@b.com", "pw12345", AppId(99)).await;
    assert!(matches!(result, Err(AuthError::InvalidTenant(AppId(99)))));
}

#[tokio::test]
async fn test_is_admin_reflects_grants() {
    let app = TestApp::spawn();

    let user_id = app
        .service
        .register(register_command("a@b.com", "pw12345", "Alice"))
        .await
        .unwrap();

    // No grant: false, not an error.
    let before = app
        .service
        .is_admin(user_id, AppId(APP_ID))
        .await
        .unwrap();
    assert!(!before);

    app.admins.grant(user_id, AppId(APP_ID));

    let after = app.service.is_admin(user_id, AppId(APP_ID)).await.unwrap();
    assert!(after);
}

#[tokio::test]
async fn test_registered_ids_are_sequential() {
    let app = TestApp::spawn();

    let first = app
        .service
        .register(register_command("a@b.com", "pw12345", "Alice"))
        .await
        .unwrap();
    let second = app
        .service
        .register(register_command("b@b.com", "pw67890", "Bob"))
        .await
        .unwrap();

    assert_eq!(first, UserId(1));
    assert_eq!(second, UserId(2));
}
