use chrono::Utc;

use crate::types::{Track, TrackFields};

/// Fallback cover art when the catalog provides no image.
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/300";

/// Defaults for locally-added tracks.
pub const DEFAULT_TRACK_DURATION: u32 = 180;
pub const DEFAULT_PRIMARY_COLOR: &str = "#ea580c";
pub const DEFAULT_ALBUM_NAME: &str = "Custom Upload";
pub const DEFAULT_MOOD_VALENCE: f64 = 0.5;

/// Mints an id for a locally-added track.
///
/// Ids are derived from the current timestamp and namespaced with a
/// `local-` prefix so they can never collide with catalog-issued ids in a
/// merged listing.
pub fn local_track_id() -> String {
    format!("local-{}", Utc::now().timestamp_millis())
}

/// Builds a fully-populated track from partial input.
///
/// The precedence rule is the contract here: an explicitly supplied field
/// always wins, a missing field gets its fixed default (album "Custom
/// Upload", a cover placeholder keyed by the minted id, 180 seconds, the
/// default orange, neutral valence, no preview). Title and artist are
/// expected to be validated by the caller; blank values pass through
/// unchanged.
pub fn apply_track_defaults(fields: TrackFields, id: String) -> Track {
    let cover_url = fields
        .cover_url
        .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/300/300", id));

    Track {
        id,
        title: fields.title.unwrap_or_default(),
        artist: fields.artist.unwrap_or_default(),
        album: fields.album.unwrap_or_else(|| DEFAULT_ALBUM_NAME.to_string()),
        cover_url,
        duration: fields.duration.unwrap_or(DEFAULT_TRACK_DURATION),
        is_ai_generated: fields.is_ai_generated.unwrap_or(false),
        primary_color: fields
            .primary_color
            .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
        mood_valence: fields.mood_valence.unwrap_or(DEFAULT_MOOD_VALENCE),
        preview_url: fields.preview_url,
    }
}

/// Case-insensitive substring match over a track's title or artist.
pub fn matches_query(track: &Track, query: &str) -> bool {
    let needle = query.to_lowercase();
    track.title.to_lowercase().contains(&needle) || track.artist.to_lowercase().contains(&needle)
}

/// Formats a duration in seconds as `m:ss` for table output.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
