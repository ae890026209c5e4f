use crate::{api::Api, config, info};

/// Reports the status of the optional integrations and the local library.
///
/// This is the CLI rendition of the web client's "Module offline" states:
/// it tells the user which features are live and which are degraded, and
/// why, without ever treating a missing key as an error.
pub async fn info(api: &Api) {
    let catalog = if config::catalog_client_id().is_some() && config::catalog_client_secret().is_some()
    {
        "configured (live new releases and search)"
    } else {
        "offline (local library only)"
    };

    let assistant = if config::ai_api_key().is_some() {
        "configured"
    } else {
        "offline (fixed responses)"
    };

    let (track_count, playlist_count) = api.library_counts().await;

    info!("Catalog integration: {}", catalog);
    info!("Support oracle: {}", assistant);
    info!(
        "Local library: {} tracks, {} playlists",
        track_count, playlist_count
    );
}
