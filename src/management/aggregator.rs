use std::{fmt, sync::Arc, time::Duration};

use tokio::{sync::Mutex, time::sleep};

use crate::{
    catalog, mapper,
    management::{RecordStore, TokenManager},
    types::{CatalogTrack, Track, TrackFields},
    utils,
};

/// Page size requested from the catalog's new-releases endpoint.
pub const NEW_RELEASES_PAGE_SIZE: u32 = 8;

/// Result cap for catalog-side track search.
pub const CATALOG_SEARCH_LIMIT: u32 = 10;

/// Artificial delay applied when serving the local library alone, so the
/// local-only path feels like a network round trip to UI consumers.
const FALLBACK_LATENCY_MS: u64 = 300;

#[derive(Debug)]
pub enum ApiError {
    Validation(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Appends mapped catalog tracks after the local ones.
///
/// This is the whole ordering policy in one place: local content first,
/// catalog content after, in the order each source produced. Used by both
/// the listing and the search merge.
pub fn merge_tracks(mut local: Vec<Track>, catalog_tracks: &[CatalogTrack]) -> Vec<Track> {
    local.extend(catalog_tracks.iter().map(mapper::map_catalog_track));
    local
}

/// Merges the local record store with catalog results.
///
/// The ordering policy is deliberate, not incidental: locally added
/// content always surfaces before externally aggregated content, so a
/// track a user just uploaded is immediately discoverable at the top of
/// the next listing.
pub struct TrackAggregator {
    store: Arc<Mutex<RecordStore>>,
    tokens: Arc<Mutex<TokenManager>>,
}

impl TrackAggregator {
    pub fn new(store: Arc<Mutex<RecordStore>>, tokens: Arc<Mutex<TokenManager>>) -> Self {
        TrackAggregator { store, tokens }
    }

    /// Lists tracks: the local library followed by a page of catalog new
    /// releases.
    ///
    /// When the catalog yields at least one track the result is
    /// `[store tracks] ++ [mapped catalog tracks]`. When it yields nothing
    /// (no credentials, network failure, empty page) the store snapshot is
    /// returned alone after a short artificial delay.
    pub async fn list_tracks(&self) -> Vec<Track> {
        let catalog_tracks = self.fetch_new_releases().await;
        let local = self.store.lock().await.all_tracks();

        match catalog_tracks {
            Some(raw) if !raw.is_empty() => merge_tracks(local, &raw),
            _ => {
                sleep(Duration::from_millis(FALLBACK_LATENCY_MS)).await;
                local
            }
        }
    }

    /// Searches tracks across the local library and the catalog.
    ///
    /// A blank or whitespace-only query delegates to [`Self::list_tracks`].
    /// Otherwise the catalog full-text search and a local case-insensitive
    /// title/artist substring match are issued without sequential
    /// dependency and joined; the result is `[local matches] ++ [catalog
    /// matches]`. A failed catalog call only empties the catalog half:
    /// search never fully fails while the store is reachable.
    pub async fn search(&self, query: &str) -> Vec<Track> {
        if query.trim().is_empty() {
            return self.list_tracks().await;
        }

        let (local, catalog_tracks) =
            tokio::join!(self.local_matches(query), self.fetch_catalog_search(query));

        merge_tracks(local, catalog_tracks.as_deref().unwrap_or_default())
    }

    /// Adds a locally-supplied track to the record store.
    ///
    /// Title and artist are required; a blank or missing value fails with
    /// a validation error and performs no mutation. On success the track
    /// is completed via `utils::apply_track_defaults`, prepended to the
    /// store and returned fully populated.
    pub async fn add_track(&self, fields: TrackFields) -> Result<Track, ApiError> {
        let blank = |field: &Option<String>| field.as_deref().is_none_or(|v| v.trim().is_empty());

        if blank(&fields.title) || blank(&fields.artist) {
            return Err(ApiError::Validation(
                "Title and Artist are required".to_string(),
            ));
        }

        let track = utils::apply_track_defaults(fields, utils::local_track_id());
        self.store.lock().await.add_track(track.clone());

        Ok(track)
    }

    async fn local_matches(&self, query: &str) -> Vec<Track> {
        self.store
            .lock()
            .await
            .all_tracks()
            .into_iter()
            .filter(|t| utils::matches_query(t, query))
            .collect()
    }

    async fn fetch_new_releases(&self) -> Option<Vec<CatalogTrack>> {
        let token = self.tokens.lock().await.get_valid_token().await?;
        catalog::releases::get_new_releases(&token, NEW_RELEASES_PAGE_SIZE)
            .await
            .ok()
    }

    async fn fetch_catalog_search(&self, query: &str) -> Option<Vec<CatalogTrack>> {
        let token = self.tokens.lock().await.get_valid_token().await?;
        catalog::search::search_tracks(&token, query, CATALOG_SEARCH_LIMIT)
            .await
            .ok()
    }
}
