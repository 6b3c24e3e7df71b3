//! spotop library
//!
//! Browse the Spotify top tracks and top artists of the signed-in user, page by
//! page. The pagination state lives in [`management::TopListManager`], the
//! conversion of provider pages into display records in [`formatter`].
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration from environment variables and `.env`
//! - `formatter` - Pure normalization of provider pages
//! - `management` - Token cache, credentials and pagination state
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotop::{
//!     management::{StaticCredential, TopListManager},
//!     spotify::top::SpotifyTopFetcher,
//!     types::{Query, ResultKind, TimeWindow},
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let query = Query::new(ResultKind::Artist, TimeWindow::LongTerm);
//!     let manager = TopListManager::new(query, SpotifyTopFetcher::new(), StaticCredential::new("BQC..."));
//!     manager.request_next_page().await;
//!     println!("{:?}", manager.snapshot().await.records);
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod formatter;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Boxed dynamic error with Send + Sync bounds so it can cross task
/// boundaries in async code.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// ```
/// info!("Fetching page {}...", page);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for unrecoverable errors at the CLI edge; library code returns errors
/// instead.
///
/// ```
/// error!("Failed to load token. Please run spotop auth");
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
