use reqwest::Client;

use crate::{
    config,
    recommender::{ApiFailure, classify_response},
    types::{RecommendationRequest, Song},
};

/// Fetches recommendations from the backend's `/recommend` endpoint.
///
/// Issues a single GET request carrying the subject identifier, graph type
/// and traversal algorithm as percent-encoded query parameters, and
/// normalizes the response through [`classify_response`].
///
/// # Arguments
///
/// * `request` - subject id plus graph/algorithm selection; see
///   [`RecommendationRequest::artist_based`] and
///   [`RecommendationRequest::mood_based`]
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Song>)` - recommended songs in backend ranking order, each
///   optionally carrying a relevance score
/// - `Err(ApiFailure)` - transport error, HTTP error, explicit no-match
///   (including an unknown mood), or an empty recommendation set
///
/// # Example
///
/// ```
/// let request = RecommendationRequest::mood_based("happy".to_string());
/// let songs = recommend(&request).await?;
/// ```
pub async fn recommend(request: &RecommendationRequest) -> Result<Vec<Song>, ApiFailure> {
    let api_url = format!("{uri}/recommend", uri = config::recommender_api_url());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[
            ("songId", request.subject_id.clone()),
            ("graphType", request.graph_type.to_string()),
            ("algorithm", request.algorithm.to_string()),
        ])
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
