//! # Catalog Integration Module
//!
//! Client for the external music catalog (Spotify Web API). The catalog is
//! an optional collaborator: the application treats it as a best-effort
//! source of new releases and search results layered on top of the local
//! record store.
//!
//! ## Submodules
//!
//! - [`auth`] - OAuth 2.0 client-credentials token exchange. No user
//!   interaction, no redirect: the app authenticates as itself with the
//!   configured client id/secret and caches the bearer token until expiry
//!   (see `management::TokenManager`).
//! - [`releases`] - New-release retrieval. The new-releases endpoint speaks
//!   in albums, so one follow-up lookup per album fetches its first track;
//!   lookups run concurrently and failed albums are silently dropped.
//! - [`search`] - Full-text track search with catalog-side ranking.
//!
//! ## Failure semantics
//!
//! Nothing in this module is allowed to take the application down. Every
//! network, auth or parse failure surfaces as an `Err` that callers
//! collapse into "absent", and absent is treated exactly like an empty
//! result: the app falls back to the local record store and keeps
//! rendering. There are no retries; the next user-triggered action simply
//! tries again.

pub mod auth;
pub mod releases;
pub mod search;
