use crate::types::{ArtistHours, GenreShare, MoodPoint, Playlist, Track, UserStats};

/// Process-lifetime collection standing in for a persistent database.
///
/// Holds tracks, featured playlists and the user's listening stats. The
/// store is an explicit value with a defined lifetime, created once and
/// injected where it is needed; tests get isolation by constructing a
/// fresh instance. All reads hand out independent snapshots, never a live
/// reference to the backing collections, and the only mutation is the
/// prepend performed by [`RecordStore::add_track`].
pub struct RecordStore {
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
    stats: UserStats,
}

impl RecordStore {
    /// Creates a store pre-populated with the demo library.
    pub fn seeded() -> Self {
        let tracks = seed_tracks();
        let playlists = seed_playlists(&tracks);

        RecordStore {
            tracks,
            playlists,
            stats: seed_stats(),
        }
    }

    /// Creates an empty store (no tracks, no playlists, zeroed stats).
    pub fn empty() -> Self {
        RecordStore {
            tracks: Vec::new(),
            playlists: Vec::new(),
            stats: UserStats {
                top_artists: Vec::new(),
                mood_history: Vec::new(),
                genre_distribution: Vec::new(),
            },
        }
    }

    /// Returns a snapshot of all tracks, most recently added first.
    pub fn all_tracks(&self) -> Vec<Track> {
        self.tracks.clone()
    }

    pub fn find_track(&self, id: &str) -> Option<Track> {
        self.tracks.iter().find(|t| t.id == id).cloned()
    }

    /// Prepends a track so it surfaces first in subsequent listings.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.insert(0, track);
    }

    pub fn playlists(&self) -> Vec<Playlist> {
        self.playlists.clone()
    }

    pub fn find_playlist(&self, id: &str) -> Option<Playlist> {
        self.playlists.iter().find(|p| p.id == id).cloned()
    }

    pub fn stats(&self) -> UserStats {
        self.stats.clone()
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}

fn track(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    cover_url: &str,
    duration: u32,
    primary_color: &str,
    mood_valence: f64,
    is_ai_generated: bool,
) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        cover_url: cover_url.to_string(),
        duration,
        is_ai_generated,
        primary_color: primary_color.to_string(),
        mood_valence,
        preview_url: None,
    }
}

fn seed_tracks() -> Vec<Track> {
    vec![
        track(
            "local-1",
            "Midnight City",
            "M83",
            "Hurry Up, We're Dreaming",
            "https://picsum.photos/id/10/300/300",
            243,
            "#c2410c",
            0.8,
            false,
        ),
        track(
            "local-2",
            "Digital Silence",
            "AI Composite v4",
            "Generated Dreams",
            "https://picsum.photos/id/20/300/300",
            180,
            "#9f1239",
            0.4,
            true,
        ),
        track(
            "local-3",
            "Bohemian Rhapsody",
            "Queen",
            "A Night at the Opera",
            "https://picsum.photos/id/30/300/300",
            354,
            "#78350f",
            0.6,
            false,
        ),
        track(
            "local-4",
            "Blinding Lights",
            "The Weeknd",
            "After Hours",
            "https://picsum.photos/id/40/300/300",
            200,
            "#991b1b",
            0.9,
            false,
        ),
        track(
            "local-5",
            "Nightcall",
            "Kavinsky",
            "OutRun",
            "https://picsum.photos/id/50/300/300",
            258,
            "#ea580c",
            0.5,
            false,
        ),
    ]
}

fn seed_playlists(tracks: &[Track]) -> Vec<Playlist> {
    vec![
        Playlist {
            id: "p1".to_string(),
            name: "Discover Weekly".to_string(),
            cover_url: "https://picsum.photos/id/60/300/300".to_string(),
            track_count: 30,
            owner: "Aura".to_string(),
            tracks: vec![tracks[0].clone(), tracks[1].clone(), tracks[4].clone()],
        },
        Playlist {
            id: "p2".to_string(),
            name: "Synthwave Essentials".to_string(),
            cover_url: "https://picsum.photos/id/70/300/300".to_string(),
            track_count: 50,
            owner: "RetroLover".to_string(),
            tracks: vec![tracks[0].clone(), tracks[3].clone(), tracks[4].clone()],
        },
    ]
}

fn seed_stats() -> UserStats {
    UserStats {
        top_artists: vec![
            ArtistHours {
                name: "M83".to_string(),
                hours: 120,
            },
            ArtistHours {
                name: "The Weeknd".to_string(),
                hours: 95,
            },
            ArtistHours {
                name: "Queen".to_string(),
                hours: 80,
            },
            ArtistHours {
                name: "Daft Punk".to_string(),
                hours: 60,
            },
            ArtistHours {
                name: "Kavinsky".to_string(),
                hours: 55,
            },
        ],
        mood_history: vec![
            MoodPoint {
                date: "Mon".to_string(),
                valence: 0.4,
            },
            MoodPoint {
                date: "Tue".to_string(),
                valence: 0.6,
            },
            MoodPoint {
                date: "Wed".to_string(),
                valence: 0.3,
            },
            MoodPoint {
                date: "Thu".to_string(),
                valence: 0.8,
            },
            MoodPoint {
                date: "Fri".to_string(),
                valence: 0.9,
            },
            MoodPoint {
                date: "Sat".to_string(),
                valence: 0.85,
            },
            MoodPoint {
                date: "Sun".to_string(),
                valence: 0.7,
            },
        ],
        genre_distribution: vec![
            GenreShare {
                name: "Pop".to_string(),
                value: 35,
            },
            GenreShare {
                name: "Synthwave".to_string(),
                value: 35,
            },
            GenreShare {
                name: "Rock".to_string(),
                value: 20,
            },
            GenreShare {
                name: "Jazz".to_string(),
                value: 10,
            },
        ],
    }
}
