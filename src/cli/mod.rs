//! # CLI Module
//!
//! User-facing command implementations for the Aura CLI. Each command is a
//! thin view over the [`crate::api::Api`] facade: it renders a spinner
//! while the facade call is in flight, then formats the result as a table
//! or a sequence of status lines.
//!
//! ## Commands
//!
//! - [`list_tracks`] - Home feed: local library merged with catalog new
//!   releases, or a filtered search listing
//! - [`add_track`] - Add a custom track to the local library
//! - [`list_playlists`] / [`playlist_vibe`] - Featured playlists and their
//!   AI vibe analysis
//! - [`stats`] - Listening stats: top artists, mood history, genres
//! - [`battle`] - Pick two random tracks for a playlist battle matchup
//! - [`support`] - Support oracle, one-shot or interactive session
//! - [`play`] - Playback simulation driving the player state controller
//! - [`info`] - Integration status and library counts
//!
//! ## Degradation
//!
//! No command fails because an external integration is missing. With zero
//! configuration the track listing serves the local library, search
//! matches locally, and the support oracle answers with its fixed offline
//! message. The only terminating error in this layer is an unreadable
//! environment at startup.

mod battle;
mod info;
mod play;
mod playlists;
mod stats;
mod support;
mod tracks;

pub use battle::battle;
pub use info::info;
pub use play::play;
pub use playlists::list_playlists;
pub use playlists::playlist_vibe;
pub use stats::stats;
pub use support::support;
pub use tracks::add_track;
pub use tracks::list_tracks;
