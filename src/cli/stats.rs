use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    api::Api,
    info,
    types::{ArtistHoursRow, GenreShareRow},
};

pub async fn stats(api: &Api) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Compiling listening stats...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let stats = api.user_stats().await;
    pb.finish_and_clear();

    info!("Top artists");
    let artist_rows: Vec<ArtistHoursRow> = stats
        .top_artists
        .iter()
        .map(|a| ArtistHoursRow {
            artist: a.name.clone(),
            hours: a.hours,
        })
        .collect();
    println!("{}\n", Table::new(artist_rows));

    info!("Genre distribution");
    let genre_rows: Vec<GenreShareRow> = stats
        .genre_distribution
        .iter()
        .map(|g| GenreShareRow {
            genre: g.name.clone(),
            share: format!("{}%", g.value),
        })
        .collect();
    println!("{}\n", Table::new(genre_rows));

    info!("Mood history");
    for point in &stats.mood_history {
        // ten-slot bar, one block per 0.1 valence
        let filled = (point.valence * 10.0).round() as usize;
        let bar: String = "█".repeat(filled.min(10)) + &"░".repeat(10 - filled.min(10));
        println!("  {:<4} {} {:.2}", point.date, bar, point.valence);
    }
}
