//! Maps the catalog's track representation into the canonical Aura track.
//!
//! The catalog speaks in albums, artist lists and millisecond durations;
//! the app wants a flat track with a display color and a mood estimate.
//! Everything here is total: malformed input (a missing image list, an
//! empty artist list) degrades to a placeholder, never to an error.

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::{
    types::{CatalogTrack, Track},
    utils,
};

/// Converts a raw catalog track into the canonical track shape.
///
/// Field rules:
/// - `artist` joins all catalog artist names with `", "`.
/// - `duration` truncates milliseconds to whole seconds.
/// - `cover_url` takes the first album image, falling back to a fixed
///   placeholder when the catalog returns none.
/// - `primary_color` is derived deterministically from the album id, see
///   [`warm_color`].
/// - `mood_valence` is a simulated placeholder in [0.5, 1.0): the catalog
///   exposes no mood signal without its audio-analysis endpoint, so this
///   value is NOT authoritative and only feeds the mood-history styling.
/// - `is_ai_generated` is always false; the catalog has no such flag.
pub fn map_catalog_track(raw: &CatalogTrack) -> Track {
    let artist = raw
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let cover_url = raw
        .album
        .images
        .first()
        .map(|img| img.url.clone())
        .unwrap_or_else(|| utils::PLACEHOLDER_COVER_URL.to_string());

    Track {
        id: raw.id.clone(),
        title: raw.name.clone(),
        artist,
        album: raw.album.name.clone(),
        cover_url,
        duration: (raw.duration_ms / 1000) as u32,
        is_ai_generated: false,
        primary_color: warm_color(&raw.album.id),
        mood_valence: 0.5 + rand::rng().random_range(0.0..0.5),
        preview_url: raw.preview_url.clone(),
    }
}

/// Derives a deterministic warm HSL color from an opaque identifier.
///
/// The identifier is hashed with SHA-256 and the digest is mapped into a
/// constrained range: hue in [0, 60) degrees, saturation 80-99%, lightness
/// 40-59%. Every derived color therefore lands in the orange/red/amber
/// family regardless of input, and the same identifier always produces the
/// same color (no randomness, no time dependency).
pub fn warm_color(seed: &str) -> String {
    let digest = Sha256::digest(seed.as_bytes());
    let hash = digest
        .iter()
        .take(8)
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));

    let hue = hash % 60;
    let saturation = 80 + u64::from(digest[8]) % 20;
    let lightness = 40 + u64::from(digest[9]) % 20;

    format!("hsl({}, {}%, {}%)", hue, saturation, lightness)
}
