use colored::Colorize;
use rand::Rng;

use crate::{api::Api, info, types::Track, warning};

/// Picks two distinct random tracks from the current listing and presents
/// them as a playlist-battle matchup with a simulated vote split.
pub async fn battle(api: &Api) {
    let tracks = api.list_tracks().await;

    if tracks.len() < 2 {
        warning!("Need at least two tracks in the library for a battle.");
        return;
    }

    let mut rng = rand::rng();
    let first = rng.random_range(0..tracks.len());
    let second = loop {
        let candidate = rng.random_range(0..tracks.len());
        if candidate != first {
            break candidate;
        }
    };

    let votes_first = rng.random_range(35..=65);

    println!("{}", "⚡ PLAYLIST BATTLE".yellow().bold());
    contender(&tracks[first], votes_first);
    println!("{}", "        vs".dimmed());
    contender(&tracks[second], 100 - votes_first);

    if votes_first >= 50 {
        info!("Crowd favorite: {}", tracks[first].title);
    } else {
        info!("Crowd favorite: {}", tracks[second].title);
    }
}

fn contender(track: &Track, votes: u32) {
    println!(
        "  {} - {}  {}",
        track.title.bold(),
        track.artist,
        format!("{}%", votes).cyan()
    );
}
