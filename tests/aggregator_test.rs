use auracli::api::Api;
use auracli::management::{ApiError, RecordStore, TokenManager, merge_tracks};
use auracli::types::{CatalogAlbum, CatalogArtist, CatalogTrack, Track, TrackFields};
use auracli::utils::apply_track_defaults;

// Facade with a fresh seeded store and no catalog credentials: every
// catalog call short-circuits to absent without touching the network.
fn offline_api() -> Api {
    Api::with_store(RecordStore::seeded(), TokenManager::without_credentials())
}

fn fields(title: Option<&str>, artist: Option<&str>) -> TrackFields {
    TrackFields {
        title: title.map(|s| s.to_string()),
        artist: artist.map(|s| s.to_string()),
        ..TrackFields::default()
    }
}

fn local_track(id: &str, title: &str, artist: &str) -> Track {
    apply_track_defaults(fields(Some(title), Some(artist)), id.to_string())
}

fn catalog_track(id: &str, name: &str, artist: &str) -> CatalogTrack {
    CatalogTrack {
        id: id.to_string(),
        name: name.to_string(),
        artists: vec![CatalogArtist {
            id: format!("{}_artist", id),
            name: artist.to_string(),
        }],
        album: CatalogAlbum {
            id: format!("{}_album", id),
            name: "Some Album".to_string(),
            images: Vec::new(),
            release_date: None,
        },
        duration_ms: 200_000,
        preview_url: None,
    }
}

#[tokio::test]
async fn test_list_tracks_offline_returns_store_snapshot() {
    let api = offline_api();

    let tracks = api.list_tracks().await;

    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["local-1", "local-2", "local-3", "local-4", "local-5"]);
}

#[tokio::test]
async fn test_added_track_is_first_in_next_listing() {
    let api = offline_api();

    let added = api
        .add_track(fields(Some("Fresh Drop"), Some("Newcomer")))
        .await
        .expect("valid input must be accepted");

    // fully populated on return
    assert!(added.id.starts_with("local-"));
    assert_eq!(added.album, "Custom Upload");
    assert_eq!(added.duration, 180);
    assert!(!added.primary_color.is_empty());

    let tracks = api.list_tracks().await;
    assert_eq!(tracks.len(), 6);
    assert_eq!(tracks[0].id, added.id);
}

#[tokio::test]
async fn test_add_track_requires_title_and_artist() {
    let api = offline_api();

    let cases = vec![
        fields(None, Some("Artist")),
        fields(Some("Title"), None),
        fields(Some("   "), Some("Artist")),
        fields(Some("Title"), Some("")),
        fields(None, None),
    ];

    for input in cases {
        match api.add_track(input).await {
            Err(ApiError::Validation(_)) => {}
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    // no mutation happened
    let tracks = api.list_tracks().await;
    assert_eq!(tracks.len(), 5);
}

#[tokio::test]
async fn test_blank_search_equals_listing() {
    let api = offline_api();

    let listed: Vec<String> = api.list_tracks().await.into_iter().map(|t| t.id).collect();
    let searched: Vec<String> = api.search_tracks("   ").await.into_iter().map(|t| t.id).collect();

    assert_eq!(listed, searched);
}

#[tokio::test]
async fn test_search_matches_locally_when_catalog_absent() {
    let api = offline_api();

    let results = api.search_tracks("weeknd").await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Blinding Lights");

    // case-insensitive, on title too
    let results = api.search_tracks("BOHEMIAN").await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "local-3");

    let results = api.search_tracks("no such thing").await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_sees_newly_added_tracks() {
    let api = offline_api();

    api.add_track(fields(Some("Obscure B-Side"), Some("Garage Band")))
        .await
        .expect("valid input must be accepted");

    let results = api.search_tracks("garage").await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Obscure B-Side");
}

#[test]
fn test_merge_policy_puts_local_first() {
    let local = vec![
        local_track("local-a", "A", "One"),
        local_track("local-b", "B", "Two"),
        local_track("local-c", "C", "Three"),
    ];
    let catalog = vec![catalog_track("x", "X", "Four"), catalog_track("y", "Y", "Five")];

    let merged = merge_tracks(local, &catalog);

    let ids: Vec<&str> = merged.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["local-a", "local-b", "local-c", "x", "y"]);
}

#[test]
fn test_merge_with_empty_catalog_is_identity() {
    let local = vec![local_track("local-a", "A", "One")];
    let merged = merge_tracks(local.clone(), &[]);

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].id, local[0].id);
}

#[tokio::test]
async fn test_playlists_and_stats_come_from_the_store() {
    let api = offline_api();

    let playlists = api.list_playlists().await;
    assert_eq!(playlists.len(), 2);
    assert_eq!(playlists[0].id, "p1");

    let stats = api.user_stats().await;
    assert_eq!(stats.top_artists[0].name, "M83");
}

#[tokio::test]
async fn test_chat_degrades_without_api_key() {
    // no GEMINI_API_KEY in the test environment
    if std::env::var("GEMINI_API_KEY").is_ok() {
        return;
    }

    let api = offline_api();
    let reply = api.chat("why is my playlist sad?").await;
    assert_eq!(reply, "System Offline: API key missing in backend configuration.");
}
