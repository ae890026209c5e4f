use auracli::mapper::{map_catalog_track, warm_color};
use auracli::types::{CatalogAlbum, CatalogArtist, CatalogImage, CatalogTrack};
use auracli::utils::PLACEHOLDER_COVER_URL;

// Helper function to create a raw catalog track
fn create_catalog_track(
    id: &str,
    name: &str,
    artist_names: &[&str],
    album_id: &str,
    album_name: &str,
    image_urls: &[&str],
    duration_ms: u64,
    preview_url: Option<&str>,
) -> CatalogTrack {
    CatalogTrack {
        id: id.to_string(),
        name: name.to_string(),
        artists: artist_names
            .iter()
            .map(|n| CatalogArtist {
                id: format!("{}_artist_id", n),
                name: n.to_string(),
            })
            .collect(),
        album: CatalogAlbum {
            id: album_id.to_string(),
            name: album_name.to_string(),
            images: image_urls
                .iter()
                .map(|u| CatalogImage { url: u.to_string() })
                .collect(),
            release_date: Some("2024-05-17".to_string()),
        },
        duration_ms,
        preview_url: preview_url.map(|u| u.to_string()),
    }
}

#[test]
fn test_map_basic_fields() {
    let raw = create_catalog_track(
        "cat1",
        "Starlight",
        &["Muse"],
        "album1",
        "Black Holes",
        &["https://img.example/cover.jpg"],
        243_999,
        Some("https://audio.example/preview.mp3"),
    );

    let track = map_catalog_track(&raw);

    assert_eq!(track.id, "cat1");
    assert_eq!(track.title, "Starlight");
    assert_eq!(track.artist, "Muse");
    assert_eq!(track.album, "Black Holes");
    assert_eq!(track.cover_url, "https://img.example/cover.jpg");

    // milliseconds are floored to whole seconds
    assert_eq!(track.duration, 243);

    assert_eq!(
        track.preview_url.as_deref(),
        Some("https://audio.example/preview.mp3")
    );

    // the catalog carries no AI flag
    assert!(!track.is_ai_generated);
}

#[test]
fn test_multi_artist_names_are_comma_joined() {
    let raw = create_catalog_track(
        "cat2",
        "Duet",
        &["First Artist", "Second Artist", "Third Artist"],
        "album2",
        "Collabs",
        &["https://img.example/c.jpg"],
        180_000,
        None,
    );

    let track = map_catalog_track(&raw);
    assert_eq!(track.artist, "First Artist, Second Artist, Third Artist");
}

#[test]
fn test_missing_images_fall_back_to_placeholder() {
    let raw = create_catalog_track("cat3", "No Art", &["Nobody"], "album3", "Plain", &[], 10_000, None);

    let track = map_catalog_track(&raw);
    assert_eq!(track.cover_url, PLACEHOLDER_COVER_URL);
}

#[test]
fn test_mood_valence_is_in_placeholder_range() {
    for i in 0..25 {
        let raw = create_catalog_track(
            &format!("cat{}", i),
            "Track",
            &["Artist"],
            &format!("album{}", i),
            "Album",
            &[],
            60_000,
            None,
        );

        let track = map_catalog_track(&raw);
        assert!(track.mood_valence >= 0.5);
        assert!(track.mood_valence < 1.0);
    }
}

#[test]
fn test_mapping_is_deterministic_for_color_and_duration() {
    let raw = create_catalog_track(
        "cat4",
        "Repeat",
        &["Artist"],
        "album4",
        "Album",
        &["https://img.example/a.jpg"],
        123_456,
        None,
    );

    let first = map_catalog_track(&raw);
    let second = map_catalog_track(&raw);

    assert_eq!(first.primary_color, second.primary_color);
    assert_eq!(first.duration, second.duration);
}

#[test]
fn test_warm_color_is_deterministic() {
    assert_eq!(warm_color("some-album-id"), warm_color("some-album-id"));
    assert_ne!(warm_color("some-album-id"), warm_color("another-album-id"));
}

#[test]
fn test_warm_color_stays_in_warm_band() {
    for i in 0..50 {
        let color = warm_color(&format!("album-{}", i));

        // shape: hsl(H, S%, L%)
        assert!(color.starts_with("hsl(") && color.ends_with(")"));
        let inner = &color[4..color.len() - 1];
        let parts: Vec<&str> = inner.split(", ").collect();
        assert_eq!(parts.len(), 3);

        let hue: u64 = parts[0].parse().unwrap();
        let saturation: u64 = parts[1].trim_end_matches('%').parse().unwrap();
        let lightness: u64 = parts[2].trim_end_matches('%').parse().unwrap();

        assert!(hue < 60);
        assert!((80..100).contains(&saturation));
        assert!((40..60).contains(&lightness));
    }
}
