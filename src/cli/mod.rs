//! # CLI Module
//!
//! User-facing commands of spotop. Each command loads what it needs, drives the
//! lower layers and prints the result; fatal problems end the process through
//! the [`error!`](crate::error) macro.
//!
//! ```text
//! CLI Layer (tables, prompts, spinners)
//!     ↓
//! Management Layer (token cache, pagination state)
//!     ↓
//! Spotify Layer (HTTP requests)
//! ```
//!
//! - [`auth`] - Authorize with Spotify and cache the token
//! - [`top`] - Page through top tracks or artists
//! - [`album`] - List the tracks of an album
//!
//! ```bash
//! spotop auth
//! spotop top --type artists --range long-term --pages 3
//! spotop top --interactive
//! spotop album 4aawyAB9vmqN3uQ7FjRGTy
//! ```

mod album;
mod auth;
mod top;

pub use album::album;
pub use auth::auth;
pub use top::PageLimit;
pub use top::top;
