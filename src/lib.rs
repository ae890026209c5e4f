//! Aura Music CLI Library
//!
//! This library implements the client side of the Aura music app: a local
//! in-memory record store merged with the live Spotify catalog when
//! credentials are configured, listening stats, an AI-backed support oracle,
//! and a playback state controller. Every external integration is optional
//! and degrades silently, so the whole application is usable with zero
//! configuration.
//!
//! # Modules
//!
//! - `ai` - Support oracle and vibe analysis (single-turn AI completions)
//! - `api` - The facade the CLI talks to (tracks, playlists, user, ai)
//! - `catalog` - Spotify Web API client (auth, new releases, search)
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Record store, track aggregation and token caching
//! - `mapper` - Catalog-to-canonical track mapping
//! - `player` - Playback state machine with synthetic progress
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod ai;
pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod management;
pub mod mapper;
pub mod player;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it
/// composes in async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Fetching new releases...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Track added to the library");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for unrecoverable conditions: the process terminates with exit
/// code 1 immediately after the message is printed. A degraded upstream
/// service is never an error in this application; use `warning!` for
/// those instead.
///
/// # Example
///
/// ```
/// error!("Cannot load environment: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// For recoverable issues the user should notice: an offline catalog, a
/// rejected track submission, a degraded assistant.
///
/// # Example
///
/// ```
/// warning!("Catalog unavailable, listing local library only");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
