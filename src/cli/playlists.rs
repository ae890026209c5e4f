use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{api::Api, info, types::PlaylistTableRow, warning};

pub async fn list_playlists(api: &Api) {
    let pb = spinner("Loading featured playlists...");
    let playlists = api.list_playlists().await;
    pb.finish_and_clear();

    if playlists.is_empty() {
        warning!("No playlists available.");
        return;
    }

    let rows: Vec<PlaylistTableRow> = playlists
        .iter()
        .map(|p| PlaylistTableRow {
            name: p.name.clone(),
            owner: p.owner.clone(),
            tracks: p.track_count,
        })
        .collect();

    println!("{}", Table::new(rows));

    for playlist in &playlists {
        info!(
            "{} ({}): {}",
            playlist.name,
            playlist.id,
            playlist
                .tracks
                .iter()
                .map(|t| t.title.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

pub async fn playlist_vibe(api: &Api, playlist_id: String) {
    let pb = spinner("Analyzing vibe...");
    let vibe = api.playlist_vibe(&playlist_id).await;
    pb.finish_and_clear();

    match vibe {
        Some(text) => info!("{}", text),
        None => warning!("No playlist with id '{}'.", playlist_id),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
