//! # API Module
//!
//! HTTP endpoints served by the temporary local server during `spotop auth`.
//!
//! - [`callback`] - Receives the authorization code from Spotify's authorization
//!   server and exchanges it, together with the PKCE verifier, for a token.
//! - [`health`] - Reports status and version, handy to check that the redirect
//!   URI actually reaches this process.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotop::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
