use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    cli::render,
    info,
    recommender::{self, ApiFailure},
    types::RecommendationRequest,
    utils,
};

/// Runs the two-phase search pipeline: resolve the query to a subject
/// song, then fetch artist-based recommendations anchored on it. All
/// effects are observed through the rendered output.
pub async fn search(raw_query: String) {
    // Empty input issues no request and renders nothing
    let Some(query) = utils::normalize_query(&raw_query) else {
        return;
    };

    info!("Searching for: {}", query);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching songs...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let searched = recommender::search(&query).await;
    pb.finish_and_clear();

    let songs = match searched {
        Ok(songs) => songs,
        Err(failure) => {
            render::render_error(&search_failure_message(&failure));
            return;
        }
    };

    // Search always disambiguates to the first match
    let Some(subject) = songs.first() else {
        render::render_error(&search_failure_message(&ApiFailure::NoResults));
        return;
    };

    let request = RecommendationRequest::artist_based(subject.song_id.clone());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching recommendations...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let recommended = recommender::recommend(&request).await;
    pb.finish_and_clear();

    match recommended {
        Ok(recommendations) => render::render_results(&recommendations),
        Err(failure) => render::render_error(&recommendation_failure_message(&failure)),
    }
}

/// User-facing message for a failed search phase. Failures that carry a
/// message show it as-is; an empty match set gets the search-specific
/// wording.
pub fn search_failure_message(failure: &ApiFailure) -> String {
    match failure.message() {
        Some(message) => message.to_string(),
        None => "No songs found matching your search.".to_string(),
    }
}

/// User-facing message for a failed recommendation phase of the search
/// pipeline. An empty recommendation set renders as the no-results
/// message; everything else collapses to one retry hint.
pub fn recommendation_failure_message(failure: &ApiFailure) -> String {
    match failure {
        ApiFailure::NoResults => render::NO_RESULTS_MESSAGE.to_string(),
        _ => "Error getting recommendations. Please try again.".to_string(),
    }
}
