use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    cli::render,
    config, info,
    management::MoodSelectorManager,
    recommender::{self, ApiFailure, NotFoundReason},
    types::RecommendationRequest,
};

/// Runs one mood activation: marks the selected control as loading (every
/// other control returns to idle first), fetches mood-based
/// recommendations, renders the outcome, and returns the whole selector
/// set to idle once the request has settled.
pub async fn mood(mood_id: String) {
    let mut selector = MoodSelectorManager::new(config::moods());

    // Synchronous reset before the request goes out: at most one control
    // shows a pending state
    selector.activate(&mood_id);

    info!("Requesting recommendations for mood: {}", mood_id);

    let request = RecommendationRequest::mood_based(mood_id.clone());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching mood recommendations...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = recommender::recommend(&request).await;
    pb.finish_and_clear();

    match result {
        Ok(songs) => render::render_results(&songs),
        Err(failure) => render::render_error(&mood_failure_message(&failure, &mood_id)),
    }

    // Every control returns to idle whatever the outcome was
    selector.reset_all();
}

/// User-facing message for a failed mood activation. An unknown mood is
/// rewritten to name the mood that was asked for; an empty result set
/// renders as the no-results message; everything else passes through
/// verbatim.
pub fn mood_failure_message(failure: &ApiFailure, mood_id: &str) -> String {
    match failure {
        ApiFailure::NotFound {
            reason: NotFoundReason::UnknownMood,
            ..
        } => format!(
            "No songs found with mood \"{}\". Please try a different mood.",
            mood_id
        ),
        ApiFailure::NoResults => render::NO_RESULTS_MESSAGE.to_string(),
        other => other.to_string(),
    }
}
