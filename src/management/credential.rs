use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::management::TokenManager;

/// Supplies the bearer credential forwarded with each page request.
///
/// `None` means no user is signed in; no request may be issued then.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn credential(&self) -> Option<String>;
}

/// A fixed credential, or a fixed absence of one.
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(pub Option<String>);

impl StaticCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

#[async_trait]
impl CredentialProvider for StaticCredential {
    async fn credential(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Credential backed by the token cache, refreshed when close to expiry.
pub struct CachedCredential {
    manager: Mutex<Option<TokenManager>>,
}

impl CachedCredential {
    /// Loads the cached token; a missing or unreadable cache yields a provider
    /// that never hands out a credential.
    pub async fn load() -> Self {
        Self {
            manager: Mutex::new(TokenManager::load().await.ok()),
        }
    }

    pub fn from_manager(manager: TokenManager) -> Self {
        Self {
            manager: Mutex::new(Some(manager)),
        }
    }

    pub async fn is_signed_in(&self) -> bool {
        self.manager.lock().await.is_some()
    }
}

#[async_trait]
impl CredentialProvider for CachedCredential {
    async fn credential(&self) -> Option<String> {
        let mut lock = self.manager.lock().await;
        match lock.as_mut() {
            Some(manager) => Some(manager.get_valid_token().await),
            None => None,
        }
    }
}
