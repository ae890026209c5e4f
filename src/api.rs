//! The client facade.
//!
//! [`Api`] is the single boundary the presentation layer calls, grouping
//! four capabilities behind a stable async interface: tracks (list,
//! search, add), playlists (list, vibe), user (stats) and ai (chat). In
//! the original web client this layer is the fetch wrapper in front of the
//! backend controllers; here the "backend" lives in-process, so the facade
//! wires the record store, the aggregator and the assistant together and
//! adds the simulated latencies that keep the mock feeling like a network
//! service.

use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, time::sleep};

use crate::{
    ai,
    management::{ApiError, RecordStore, TokenManager, TrackAggregator},
    types::{Playlist, Track, TrackFields, UserStats},
};

/// Simulated round-trip latencies for store-only reads.
const PLAYLIST_LATENCY_MS: u64 = 400;
const STATS_LATENCY_MS: u64 = 600;

pub struct Api {
    store: Arc<Mutex<RecordStore>>,
    aggregator: TrackAggregator,
}

impl Api {
    /// Builds the production facade: seeded store, credentials from the
    /// environment.
    pub fn new() -> Self {
        Self::with_store(RecordStore::seeded(), TokenManager::from_env())
    }

    /// Builds a facade around an explicit store and token manager.
    ///
    /// This is the injection seam: tests pass a fresh store (and usually a
    /// credential-less token manager) to get full isolation per test.
    pub fn with_store(store: RecordStore, tokens: TokenManager) -> Self {
        let store = Arc::new(Mutex::new(store));
        let aggregator = TrackAggregator::new(Arc::clone(&store), Arc::new(Mutex::new(tokens)));

        Api { store, aggregator }
    }

    pub async fn list_tracks(&self) -> Vec<Track> {
        self.aggregator.list_tracks().await
    }

    pub async fn search_tracks(&self, query: &str) -> Vec<Track> {
        self.aggregator.search(query).await
    }

    pub async fn add_track(&self, fields: TrackFields) -> Result<Track, ApiError> {
        self.aggregator.add_track(fields).await
    }

    pub async fn list_playlists(&self) -> Vec<Playlist> {
        sleep(Duration::from_millis(PLAYLIST_LATENCY_MS)).await;
        self.store.lock().await.playlists()
    }

    /// AI vibe description for a playlist. `None` when the id is unknown.
    pub async fn playlist_vibe(&self, playlist_id: &str) -> Option<String> {
        let playlist = self.store.lock().await.find_playlist(playlist_id)?;
        let artists: Vec<String> = playlist.tracks.iter().map(|t| t.artist.clone()).collect();

        Some(ai::analyze_playlist_vibe(&playlist.name, &artists).await)
    }

    pub async fn user_stats(&self) -> UserStats {
        sleep(Duration::from_millis(STATS_LATENCY_MS)).await;
        self.store.lock().await.stats()
    }

    pub async fn chat(&self, message: &str) -> String {
        ai::generate_support_reply(message).await
    }

    /// Store counts for the status overview, bypassing simulated latency.
    pub async fn library_counts(&self) -> (usize, usize) {
        let store = self.store.lock().await;
        (store.track_count(), store.playlist_count())
    }
}

impl Default for Api {
    fn default() -> Self {
        Self::new()
    }
}
