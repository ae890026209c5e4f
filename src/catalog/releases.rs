use reqwest::Client;

use crate::{
    config,
    types::{AlbumTracksResponse, CatalogAlbum, CatalogTrack, NewReleasesResponse},
};

/// Retrieves a page of newly released tracks from the catalog.
///
/// The catalog's new-releases endpoint only exposes albums, and the richer
/// metadata (images, release date) lives at album granularity. So this
/// fetches one page of albums, then issues one further lookup per album,
/// limited to its first track, to obtain playable track records. The
/// per-album lookups are executed concurrently; an album whose lookup
/// fails is silently dropped from the result, so one bad album never
/// fails the whole batch.
///
/// # Arguments
///
/// * `token` - Valid bearer token for catalog API authentication
/// * `limit` - Maximum number of albums (and thus tracks) to fetch
///
/// # Returns
///
/// Returns `Ok(Vec<CatalogTrack>)` with up to `limit` tracks, each
/// enriched with its parent album, or `Err(reqwest::Error)` when the
/// album-page request itself fails. Callers collapse the error into
/// "catalog absent".
pub async fn get_new_releases(token: &str, limit: u32) -> Result<Vec<CatalogTrack>, reqwest::Error> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/browse/new-releases?limit={limit}",
        uri = &config::catalog_api_url(),
        limit = limit
    );

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let json = response.json::<NewReleasesResponse>().await?;

    // one lookup per album, fanned out; order restored on collection
    let mut handles = Vec::new();
    for album in json.albums.items {
        let token = token.to_string();
        handles.push(tokio::spawn(async move {
            first_track_for_album(album, &token).await
        }));
    }

    let mut tracks = Vec::new();
    for handle in handles {
        if let Ok(Ok(Some(track))) = handle.await {
            tracks.push(track);
        }
    }

    Ok(tracks)
}

/// Fetches the first track of an album and attaches the album to it.
///
/// The album-tracks endpoint returns simplified track objects without
/// album metadata, so the parent album is attached here to make the record
/// self-contained for mapping.
async fn first_track_for_album(
    album: CatalogAlbum,
    token: &str,
) -> Result<Option<CatalogTrack>, reqwest::Error> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/albums/{id}/tracks?limit=1",
        uri = &config::catalog_api_url(),
        id = album.id
    );

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let json = response.json::<AlbumTracksResponse>().await?;

    Ok(json.items.into_iter().next().map(|item| CatalogTrack {
        id: item.id,
        name: item.name,
        artists: item.artists,
        album,
        duration_ms: item.duration_ms,
        preview_url: item.preview_url,
    }))
}
