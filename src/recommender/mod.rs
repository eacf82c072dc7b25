//! # Recommendation Backend Module
//!
//! This module provides the client interface to the remote song
//! recommendation service. It implements the two read-only endpoints the
//! backend exposes, handles all HTTP communication, and normalizes the
//! backend's heterogeneous success and error shapes into one typed failure
//! taxonomy for the higher-level CLI logic.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Recommendation Client Layer
//!     ├── Song Search (free-text query resolution)
//!     └── Recommendations (graph type + algorithm selection)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Recommendation Backend
//! ```
//!
//! ## API Coverage
//!
//! - `GET /search?query=...` - Resolve a free-text query to matching songs
//! - `GET /recommend?songId=...&graphType=...&algorithm=...` - Fetch
//!   recommendations anchored on a subject song or mood
//!
//! All dynamic parameters are percent-encoded by the request builder. Each
//! call is a single attempt: there are no retries and no timeout beyond
//! what the transport enforces.
//!
//! ## Failure Taxonomy
//!
//! Every call returns `Result<Vec<Song>, ApiFailure>`:
//!
//! - [`ApiFailure::Transport`] - network failure before a response was
//!   obtained, or a body that could not be read or decoded as JSON
//! - [`ApiFailure::Http`] - non-2xx status, carrying the raw body text or a
//!   status-derived message when the body is empty
//! - [`ApiFailure::NotFound`] - a well-formed response explicitly signaling
//!   no match, classified by [`NotFoundReason`]
//! - [`ApiFailure::NoResults`] - a well-formed but empty result list
//!
//! The backend signals an unknown mood as free text in a non-2xx body. That
//! text is matched once, here, and surfaces as
//! `NotFound { reason: NotFoundReason::UnknownMood }` so callers rewrite
//! messages by enum lookup instead of scanning strings themselves.
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **serde_json** - JSON deserialization of response bodies

use std::fmt;

use reqwest::StatusCode;

use crate::types::{Song, SongsResponse};

mod recommend;
mod search;

pub use recommend::recommend;
pub use search::search;

/// Free-text marker the backend puts in the body when a mood has no songs.
const MOOD_NOT_FOUND_MARKER: &str = "No songs found with mood";

/// Why the backend reported no match for a well-formed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The requested mood is not present in the mood graph.
    UnknownMood,
    /// The query or subject matched nothing.
    NoMatch,
}

/// A failed call against the recommendation backend.
#[derive(Debug, Clone)]
pub enum ApiFailure {
    /// Network or decode failure before a usable response was obtained.
    Transport(String),
    /// Non-2xx response; `message` is the raw body if present.
    Http { status: u16, message: String },
    /// The backend explicitly signaled that nothing matched.
    NotFound {
        reason: NotFoundReason,
        message: String,
    },
    /// The backend answered with an empty result list.
    NoResults,
}

impl ApiFailure {
    /// The message carried by the failure, if it carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiFailure::Transport(message) => Some(message),
            ApiFailure::Http { message, .. } => Some(message),
            ApiFailure::NotFound { message, .. } => Some(message),
            ApiFailure::NoResults => None,
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "no results"),
        }
    }
}

impl std::error::Error for ApiFailure {}

/// Normalizes a backend response into songs or a typed failure.
///
/// The backend answers in four shapes: a JSON array of songs, a JSON object
/// `{message}` for an explicit no-match, a non-2xx status with a plain-text
/// body, and a syntactically valid but empty array. All four collapse here
/// so both endpoints share one normalization path.
///
/// # Arguments
///
/// * `status` - HTTP status of the response
/// * `body` - raw response body text
///
/// # Returns
///
/// - `Ok(Vec<Song>)` - non-empty song list, backend order preserved
/// - `Err(ApiFailure)` - every other shape, see the module docs
pub fn classify_response(status: StatusCode, body: &str) -> Result<Vec<Song>, ApiFailure> {
    if !status.is_success() {
        if body.contains(MOOD_NOT_FOUND_MARKER) {
            return Err(ApiFailure::NotFound {
                reason: NotFoundReason::UnknownMood,
                message: body.to_string(),
            });
        }

        let message = if body.is_empty() {
            format!("HTTP error! status: {}", status.as_u16())
        } else {
            body.to_string()
        };
        return Err(ApiFailure::Http {
            status: status.as_u16(),
            message,
        });
    }

    let response: SongsResponse = serde_json::from_str(body)
        .map_err(|e| ApiFailure::Transport(format!("Failed to decode response: {}", e)))?;

    match response {
        SongsResponse::Message(msg) => Err(ApiFailure::NotFound {
            reason: NotFoundReason::NoMatch,
            message: msg.message,
        }),
        SongsResponse::Songs(songs) if songs.is_empty() => Err(ApiFailure::NoResults),
        SongsResponse::Songs(songs) => Ok(songs),
    }
}
