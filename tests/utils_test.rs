use auracli::types::TrackFields;
use auracli::utils::*;

// Helper function to create validated partial input
fn titled_fields(title: &str, artist: &str) -> TrackFields {
    TrackFields {
        title: Some(title.to_string()),
        artist: Some(artist.to_string()),
        ..TrackFields::default()
    }
}

#[test]
fn test_local_track_id_is_namespaced() {
    let id = local_track_id();
    assert!(id.starts_with("local-"));

    // the suffix is a plain millisecond timestamp
    assert!(id["local-".len()..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_apply_track_defaults_fills_missing_fields() {
    let track = apply_track_defaults(titled_fields("My Song", "Me"), "local-42".to_string());

    assert_eq!(track.id, "local-42");
    assert_eq!(track.title, "My Song");
    assert_eq!(track.artist, "Me");
    assert_eq!(track.album, DEFAULT_ALBUM_NAME);
    assert_eq!(track.duration, DEFAULT_TRACK_DURATION);
    assert_eq!(track.primary_color, DEFAULT_PRIMARY_COLOR);
    assert_eq!(track.mood_valence, DEFAULT_MOOD_VALENCE);
    assert!(!track.is_ai_generated);
    assert!(track.preview_url.is_none());

    // cover placeholder is keyed by the minted id
    assert_eq!(track.cover_url, "https://picsum.photos/seed/local-42/300/300");
}

#[test]
fn test_apply_track_defaults_explicit_fields_win() {
    let fields = TrackFields {
        title: Some("My Song".to_string()),
        artist: Some("Me".to_string()),
        album: Some("Real Album".to_string()),
        cover_url: Some("https://img.example/real.jpg".to_string()),
        duration: Some(95),
        is_ai_generated: Some(true),
        primary_color: Some("#123456".to_string()),
        mood_valence: Some(0.9),
        preview_url: Some("https://audio.example/p.mp3".to_string()),
    };

    let track = apply_track_defaults(fields, "local-43".to_string());

    assert_eq!(track.album, "Real Album");
    assert_eq!(track.cover_url, "https://img.example/real.jpg");
    assert_eq!(track.duration, 95);
    assert!(track.is_ai_generated);
    assert_eq!(track.primary_color, "#123456");
    assert_eq!(track.mood_valence, 0.9);
    assert_eq!(track.preview_url.as_deref(), Some("https://audio.example/p.mp3"));
}

#[test]
fn test_matches_query_is_case_insensitive() {
    let track = apply_track_defaults(
        titled_fields("Blinding Lights", "The Weeknd"),
        "local-1".to_string(),
    );

    // title match
    assert!(matches_query(&track, "blinding"));
    assert!(matches_query(&track, "LIGHTS"));

    // artist match
    assert!(matches_query(&track, "weeknd"));
    assert!(matches_query(&track, "The WEEKND"));

    // no match
    assert!(!matches_query(&track, "daft punk"));
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59), "0:59");
    assert_eq!(format_duration(60), "1:00");
    assert_eq!(format_duration(243), "4:03");
    assert_eq!(format_duration(3605), "60:05");
}
