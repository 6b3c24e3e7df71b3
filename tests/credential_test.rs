use chrono::Utc;
use spotop::management::{CachedCredential, CredentialProvider, StaticCredential, TokenManager};
use spotop::types::Token;

fn create_test_token(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "access-123".to_string(),
        refresh_token: String::new(),
        scope: "user-top-read".to_string(),
        expires_in,
        obtained_at,
    }
}

fn now() -> u64 {
    Utc::now().timestamp() as u64
}

#[test]
fn test_fresh_token_is_not_expired() {
    let manager = TokenManager::new(create_test_token(now(), 3600));
    assert!(!manager.is_expired());
    assert_eq!(manager.current_token().access_token, "access-123");
    assert_eq!(manager.current_token().scope, "user-top-read");
}

#[test]
fn test_token_inside_expiry_margin_is_expired() {
    assert!(TokenManager::new(create_test_token(now() - 3600, 3600)).is_expired());
    assert!(TokenManager::new(create_test_token(now() - 3500, 3600)).is_expired());
}

#[tokio::test]
async fn test_cached_credential_hands_out_fresh_token() {
    let credentials =
        CachedCredential::from_manager(TokenManager::new(create_test_token(now(), 3600)));

    assert!(credentials.is_signed_in().await);
    assert_eq!(credentials.credential().await.as_deref(), Some("access-123"));
}

#[tokio::test]
async fn test_expired_token_without_refresh_token_is_kept() {
    let credentials =
        CachedCredential::from_manager(TokenManager::new(create_test_token(now() - 7200, 3600)));

    assert_eq!(credentials.credential().await.as_deref(), Some("access-123"));
}

#[tokio::test]
async fn test_static_credential() {
    assert_eq!(
        StaticCredential::new("abc").credential().await.as_deref(),
        Some("abc")
    );
    assert_eq!(StaticCredential::none().credential().await, None);
}
