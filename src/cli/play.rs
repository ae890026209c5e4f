use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    api::Api,
    info,
    player::{Player, SIMULATED_TICK_MS},
    success, warning,
};

/// Drives the player state controller through a simulated listening
/// session.
///
/// Loads the current listing, selects the requested (or first) track and
/// feeds the synthetic progress tick into the controller, rendering a
/// progress bar per track. Auto-advance walks through the listing with
/// wraparound until `count` tracks have finished. No audio is decoded;
/// preview URLs are listed as metadata only.
pub async fn play(api: &Api, track_id: Option<String>, count: u32, tick_ms: Option<u64>) {
    let tracks = api.list_tracks().await;
    if tracks.is_empty() {
        warning!("Nothing to play: the library is empty.");
        return;
    }

    let start = match &track_id {
        Some(id) => match tracks.iter().find(|t| t.id == *id) {
            Some(track) => track.clone(),
            None => {
                warning!("No track with id '{}', starting from the top.", id);
                tracks[0].clone()
            }
        },
        None => tracks[0].clone(),
    };

    let tick = Duration::from_millis(tick_ms.unwrap_or(SIMULATED_TICK_MS));

    let mut player = Player::new();
    player.select_track(start);

    let mut finished = 0;
    while finished < count {
        let Some(current) = player.current().cloned() else {
            break;
        };
        info!("Now playing: {} - {}", current.artist, current.title);

        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::with_template("  {bar:40.yellow/black} {percent:>3}%")
                .unwrap()
                .progress_chars("█▓░"),
        );

        // tick until auto-advance swaps the current track
        let mut interval = tokio::time::interval(tick);
        loop {
            interval.tick().await;
            player.tick_simulated(&tracks);
            pb.set_position(player.progress() as u64);

            let still_current = player.current().is_some_and(|t| t.id == current.id);
            if !still_current {
                break;
            }
        }

        pb.finish_and_clear();
        finished += 1;
    }

    success!("Playback session finished ({} tracks).", finished);
}
