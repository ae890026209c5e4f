use auracli::management::RecordStore;
use auracli::types::TrackFields;
use auracli::utils::apply_track_defaults;

fn custom_track(id: &str, title: &str, artist: &str) -> auracli::types::Track {
    apply_track_defaults(
        TrackFields {
            title: Some(title.to_string()),
            artist: Some(artist.to_string()),
            ..TrackFields::default()
        },
        id.to_string(),
    )
}

#[test]
fn test_seeded_store_contents() {
    let store = RecordStore::seeded();

    assert_eq!(store.track_count(), 5);
    assert_eq!(store.playlist_count(), 2);

    let tracks = store.all_tracks();
    assert_eq!(tracks[0].id, "local-1");
    assert_eq!(tracks[0].title, "Midnight City");
    assert_eq!(tracks[4].id, "local-5");

    // seed stats are a complete fixture
    let stats = store.stats();
    assert_eq!(stats.top_artists.len(), 5);
    assert_eq!(stats.mood_history.len(), 7);
    let share_sum: u32 = stats.genre_distribution.iter().map(|g| g.value).sum();
    assert_eq!(share_sum, 100);
}

#[test]
fn test_empty_store() {
    let store = RecordStore::empty();
    assert_eq!(store.track_count(), 0);
    assert_eq!(store.playlist_count(), 0);
    assert!(store.all_tracks().is_empty());
}

#[test]
fn test_add_track_prepends() {
    let mut store = RecordStore::seeded();
    store.add_track(custom_track("local-99", "Fresh Drop", "Newcomer"));

    let tracks = store.all_tracks();
    assert_eq!(tracks.len(), 6);
    assert_eq!(tracks[0].id, "local-99");
    assert_eq!(tracks[1].id, "local-1");
}

#[test]
fn test_reads_are_snapshots() {
    let store = RecordStore::seeded();

    let mut snapshot = store.all_tracks();
    snapshot.push(custom_track("local-98", "Intruder", "Nobody"));
    snapshot[0].title = "Mutated".to_string();

    // the backing collection is unaffected by snapshot mutation
    assert_eq!(store.track_count(), 5);
    assert_eq!(store.all_tracks()[0].title, "Midnight City");
}

#[test]
fn test_find_by_id() {
    let store = RecordStore::seeded();

    assert_eq!(store.find_track("local-4").map(|t| t.title), Some("Blinding Lights".to_string()));
    assert!(store.find_track("nope").is_none());

    assert_eq!(
        store.find_playlist("p2").map(|p| p.name),
        Some("Synthwave Essentials".to_string())
    );
    assert!(store.find_playlist("p9").is_none());
}

#[test]
fn test_playlist_track_count_is_display_only() {
    let store = RecordStore::seeded();
    let playlists = store.playlists();

    // the display count is intentionally independent of tracks.len()
    assert_eq!(playlists[0].track_count, 30);
    assert_eq!(playlists[0].tracks.len(), 3);
}
