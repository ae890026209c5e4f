use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub cover_url: String,
    pub duration: u32, // in seconds
    pub is_ai_generated: bool,
    pub primary_color: String,
    pub mood_valence: f64, // 0-1
    pub preview_url: Option<String>,
}

/// Partial track input for the add operation. Missing fields are filled
/// with defaults by `utils::apply_track_defaults`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackFields {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub cover_url: Option<String>,
    pub duration: Option<u32>,
    pub is_ai_generated: Option<bool>,
    pub primary_color: Option<String>,
    pub mood_valence: Option<f64>,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub cover_url: String,
    pub track_count: u32, // display count, not necessarily tracks.len()
    pub owner: String,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistHours {
    pub name: String,
    pub hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodPoint {
    pub date: String,
    pub valence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreShare {
    pub name: String,
    pub value: u32, // percentage share
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub top_artists: Vec<ArtistHours>,
    pub mood_history: Vec<MoodPoint>,
    pub genre_distribution: Vec<GenreShare>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

/// One turn of a support chat session. Immutable once created, held in an
/// ordered session-lifetime sequence, never persisted.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

// --- Catalog wire types (Spotify Web API shapes) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogImage {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogAlbum {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<CatalogImage>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Full track object as returned by the catalog search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogTrack {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<CatalogArtist>,
    pub album: CatalogAlbum,
    pub duration_ms: u64,
    #[serde(default)]
    pub preview_url: Option<String>,
}

/// Simplified track object from the album-tracks endpoint; carries no album
/// of its own, the caller attaches the parent album.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTrackItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<CatalogArtist>,
    pub duration_ms: u64,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReleasesResponse {
    pub albums: AlbumsPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumsPage {
    pub items: Vec<CatalogAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksResponse {
    pub items: Vec<AlbumTrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TracksPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksPage {
    pub items: Vec<CatalogTrack>,
}

// --- Table rows for CLI output ---

#[derive(Tabled)]
pub struct TrackTableRow {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub length: String,
    pub source: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub owner: String,
    pub tracks: u32,
}

#[derive(Tabled)]
pub struct ArtistHoursRow {
    pub artist: String,
    pub hours: u32,
}

#[derive(Tabled)]
pub struct GenreShareRow {
    pub genre: String,
    pub share: String,
}
