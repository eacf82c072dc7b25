use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A song as returned by the recommendation backend.
///
/// `title` and `artist` are display metadata and may be absent; `score` is
/// only present on recommendation results. The wire format uses camelCase
/// field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    #[serde(rename = "songId")]
    pub song_id: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub score: Option<f64>,
}

/// A successful backend response body: either a list of songs or an
/// explicit no-match object carrying a message.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SongsResponse {
    Songs(Vec<Song>),
    Message(ApiMessage),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Which similarity graph the backend queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphType {
    ArtistBased,
    MoodBased,
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            GraphType::ArtistBased => "ARTIST_BASED",
            GraphType::MoodBased => "MOOD_BASED",
        };
        write!(f, "{}", token)
    }
}

/// Which traversal strategy the backend applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dijkstra,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dijkstra => "DIJKSTRA",
        };
        write!(f, "{}", token)
    }
}

/// Parameters of one `/recommend` call. Constructed per call, never mutated.
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    pub subject_id: String,
    pub graph_type: GraphType,
    pub algorithm: Algorithm,
}

impl RecommendationRequest {
    /// Recommendations anchored on a subject song, over the
    /// artist-similarity graph.
    pub fn artist_based(subject_id: String) -> Self {
        Self {
            subject_id,
            graph_type: GraphType::ArtistBased,
            algorithm: Algorithm::Bfs,
        }
    }

    /// Recommendations anchored on a mood, over the mood graph.
    pub fn mood_based(mood_id: String) -> Self {
        Self {
            subject_id: mood_id,
            graph_type: GraphType::MoodBased,
            algorithm: Algorithm::Dijkstra,
        }
    }
}

/// Display state of one mood-selector control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodState {
    Idle,
    Loading,
}

impl fmt::Display for MoodState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MoodState::Idle => "idle",
            MoodState::Loading => "loading",
        };
        write!(f, "{}", label)
    }
}

/// One mood-selector control. Created at startup, one per configured mood;
/// state transitions only go through the mood selector manager.
#[derive(Debug, Clone)]
pub struct MoodControl {
    pub mood_id: String,
    pub state: MoodState,
}

#[derive(Tabled)]
pub struct MoodTableRow {
    pub mood: String,
    pub state: String,
}
