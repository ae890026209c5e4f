use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    api::Api,
    success,
    types::{Track, TrackFields, TrackTableRow},
    utils, warning,
};

pub async fn list_tracks(api: &Api, search: Option<String>) {
    let pb = ProgressBar::new_spinner();
    pb.set_message(match &search {
        Some(query) => format!("Searching for '{}'...", query),
        None => "Loading vibe stream...".to_string(),
    });
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let tracks = match &search {
        Some(query) => api.search_tracks(query).await,
        None => api.list_tracks().await,
    };

    pb.finish_and_clear();

    if tracks.is_empty() {
        warning!("No tracks found.");
        return;
    }

    let rows: Vec<TrackTableRow> = tracks.iter().map(track_row).collect();
    println!("{}", Table::new(rows));
}

pub async fn add_track(
    api: &Api,
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    cover_url: Option<String>,
    duration: Option<u32>,
    preview_url: Option<String>,
) {
    let fields = TrackFields {
        title,
        artist,
        album,
        cover_url,
        duration,
        preview_url,
        ..TrackFields::default()
    };

    match api.add_track(fields).await {
        Ok(track) => success!(
            "Added '{}' by {} to the library (id {}).",
            track.title,
            track.artist,
            track.id
        ),
        // validation failure: nothing was stored, the user can retry
        Err(e) => warning!("Cannot add track: {}", e),
    }
}

fn track_row(track: &Track) -> TrackTableRow {
    let mut title = track.title.clone();
    if track.is_ai_generated {
        title.push_str(" [AI]");
    }

    TrackTableRow {
        title,
        artist: track.artist.clone(),
        album: track.album.clone(),
        length: utils::format_duration(track.duration),
        source: if track.id.starts_with("local-") {
            "local".to_string()
        } else {
            "catalog".to_string()
        },
    }
}
