use reqwest::Client;

use crate::{
    config,
    types::{CatalogTrack, SearchResponse},
};

/// Runs a full-text track search against the catalog.
///
/// Ranking is catalog-side and opaque; results come back in the order the
/// catalog chose. A single query call, no pagination.
///
/// # Returns
///
/// Returns `Ok(Vec<CatalogTrack>)` with the catalog's track list, or
/// `Err(reqwest::Error)` on any failure. Callers collapse the error into
/// "catalog absent" and fall back to local matches only.
pub async fn search_tracks(
    token: &str,
    query: &str,
    limit: u32,
) -> Result<Vec<CatalogTrack>, reqwest::Error> {
    let client = Client::new();
    let api_url = format!("{uri}/search", uri = &config::catalog_api_url());
    let limit = limit.to_string();

    let response = client
        .get(&api_url)
        .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
        .bearer_auth(token)
        .send()
        .await?;

    let json = response.json::<SearchResponse>().await?;

    Ok(json.tracks.items)
}
