use reqwest::Client;

use crate::{
    config,
    recommender::{ApiFailure, classify_response},
    types::Song,
};

/// Resolves a free-text query against the backend's `/search` endpoint.
///
/// Issues a single GET request with the query percent-encoded as the
/// `query` parameter and normalizes the response through
/// [`classify_response`].
///
/// # Arguments
///
/// * `query` - trimmed, non-empty search text
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Song>)` - matching songs in backend ranking order
/// - `Err(ApiFailure)` - transport error, HTTP error, explicit no-match,
///   or an empty match set
///
/// # Example
///
/// ```
/// let songs = search("bohemian rhapsody").await?;
/// let subject = &songs[0];
/// ```
pub async fn search(query: &str) -> Result<Vec<Song>, ApiFailure> {
    let api_url = format!("{uri}/search", uri = config::recommender_api_url());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("query", query)])
        .send()
        .await
        .map_err(|e| ApiFailure::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiFailure::Transport(e.to_string()))?;

    classify_response(status, &body)
}
