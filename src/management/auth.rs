use std::{fmt, io::Error, path::PathBuf};

use chrono::Utc;

use crate::{spotify, types::Token, warning};

/// Seconds before expiry at which a token is already treated as expired.
const EXPIRY_MARGIN: u64 = 240;

#[derive(Debug)]
pub enum TokenError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::IoError(e) => write!(f, "token cache I/O failed: {}", e),
            TokenError::SerdeError(e) => write!(f, "token cache is unreadable: {}", e),
        }
    }
}

impl std::error::Error for TokenError {}

impl From<Error> for TokenError {
    fn from(err: Error) -> Self {
        TokenError::IoError(err)
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::SerdeError(err)
    }
}

/// Owns the cached OAuth token and keeps it fresh.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, TokenError> {
        let content = async_fs::read_to_string(Self::token_path()).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), TokenError> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Returns an access token, refreshing it first when it is about to expire.
    ///
    /// A failed refresh keeps the old token; the provider then rejects it and
    /// the request surfaces as an authorization error.
    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() && !self.token.refresh_token.is_empty() {
            match spotify::auth::refresh_token(&self.token.refresh_token).await {
                Ok(new_token) => {
                    self.token = new_token;
                    if let Err(e) = self.persist().await {
                        warning!("Refreshed token could not be saved: {}", e);
                    }
                }
                Err(e) => warning!("Token refresh failed: {}", e),
            }
        }

        self.token.access_token.clone()
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN >= self.token.obtained_at + self.token.expires_in
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotop/cache/token.json");
        path
    }
}
