use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use auracli::{api::Api, cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name="aura",
  bin_name="aura",
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Browse, search and add tracks
    Tracks(TracksOptions),

    /// Featured playlists
    Playlists(PlaylistsOptions),

    /// Listening stats: top artists, mood history, genres
    Stats,

    /// Pit two random tracks against each other
    Battle,

    #[clap(about = "Ask the support oracle (interactive without a message)")]
    Support(SupportOptions),

    /// Run a simulated playback session
    Play(PlayOptions),

    /// Show integration status and library counts
    Info,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Browse, search and add tracks",
    args_conflicts_with_subcommands = true // disallow mixing --search with subcommands
)]
pub struct TracksOptions {
    /// Search tracks by title or artist
    #[clap(long)]
    pub search: Option<String>,

    /// Subcommands under `tracks` (e.g., `add`)
    #[command(subcommand)]
    pub command: Option<TracksSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TracksSubcommand {
    /// Add a custom track to the local library
    Add(AddTrackOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct AddTrackOpts {
    /// Track title (required by the server, validated there)
    #[clap(long)]
    pub title: Option<String>,

    /// Track artist (required by the server, validated there)
    #[clap(long)]
    pub artist: Option<String>,

    /// Album name (defaults to "Custom Upload")
    #[clap(long)]
    pub album: Option<String>,

    /// Cover image URL
    #[clap(long)]
    pub cover_url: Option<String>,

    /// Duration in seconds (defaults to 180)
    #[clap(long)]
    pub duration: Option<u32>,

    /// Audio preview URL
    #[clap(long)]
    pub preview_url: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Subcommands under `playlists` (e.g., `vibe`)
    #[command(subcommand)]
    pub command: Option<PlaylistsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistsSubcommand {
    /// AI vibe analysis for a playlist
    Vibe(VibeOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct VibeOpts {
    /// Playlist id (see `aura playlists`)
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SupportOptions {
    /// One-shot question; omit for an interactive session
    pub message: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// Track id to start from (defaults to the top of the listing)
    #[clap(long)]
    pub track_id: Option<String>,

    /// Number of tracks to play before exiting
    #[clap(long, default_value = "1")]
    pub count: u32,

    /// Milliseconds per synthetic progress tick (default 500)
    #[clap(long)]
    pub tick_ms: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let api = Api::new();

    match cli.command {
        Command::Tracks(opt) => match opt.command {
            Some(TracksSubcommand::Add(a)) => {
                cli::add_track(
                    &api,
                    a.title,
                    a.artist,
                    a.album,
                    a.cover_url,
                    a.duration,
                    a.preview_url,
                )
                .await
            }
            None => cli::list_tracks(&api, opt.search).await,
        },

        Command::Playlists(opt) => match opt.command {
            Some(PlaylistsSubcommand::Vibe(v)) => cli::playlist_vibe(&api, v.id).await,
            None => cli::list_playlists(&api).await,
        },

        Command::Stats => cli::stats(&api).await,
        Command::Battle => cli::battle(&api).await,
        Command::Support(opt) => cli::support(&api, opt.message).await,
        Command::Play(opt) => cli::play(&api, opt.track_id, opt.count, opt.tick_ms).await,
        Command::Info => cli::info(&api).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
