mod auth;
mod credential;
mod top_list;

pub use auth::TokenError;
pub use auth::TokenManager;
pub use credential::CachedCredential;
pub use credential::CredentialProvider;
pub use credential::StaticCredential;
pub use top_list::RequestOutcome;
pub use top_list::TopListManager;
pub use top_list::TopListSnapshot;
