//! # Spotify Integration Module
//!
//! HTTP layer between spotop and the Spotify Web API.
//!
//! ```text
//! CLI
//!   ↓
//! TopListManager (pagination state)
//!   ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Top items (tracks, artists)
//!     └── Album track listings
//!   ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - Authorization Code flow with PKCE, token exchange and refresh.
//! - [`top`] - [`top::PageFetcher`] and its Web API implementation for
//!   `GET /me/top/{tracks|artists}`.
//! - [`album`] - `GET /albums/{id}` formatted as track records.
//!
//! ## Errors
//!
//! Data requests fail with [`FetchError`]: `Auth` for 401/403, `MalformedResponse`
//! for bodies that are not a page, `Network` for everything else. Nothing in
//! this module retries a failed request.
//!
//! ## API Coverage
//!
//! - `GET /me/top/tracks`, `GET /me/top/artists` - paged by `limit`/`offset`, ranked
//!   over a `time_range`
//! - `GET /albums/{id}` - album with its first page of tracks
//! - `POST /api/token` - code exchange and refresh

pub mod album;
pub mod auth;
mod error;
pub mod top;

pub use error::FetchError;
