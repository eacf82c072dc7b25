//! # CLI Module
//!
//! This module provides the command-line interface layer for Sorecli, a
//! client for a graph-based song recommendation service. It implements all
//! user-facing commands and coordinates between the recommendation client,
//! the mood-selector state, and result rendering.
//!
//! ## Command Categories
//!
//! ### Search
//!
//! - [`search`] - Two-phase pipeline: resolve a free-text query to a
//!   subject song, then fetch artist-based recommendations for it
//!
//! ### Mood Selection
//!
//! - [`mood`] - Activate one mood selector and fetch mood-based
//!   recommendations
//! - [`moods`] - List the configured mood selectors and their states
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Mood-Selector State)
//!     ↓
//! Recommender Layer (Backend Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command delegates to the recommender module for remote calls while
//! handling user interaction, progress feedback, and error presentation.
//!
//! ## Error Handling Philosophy
//!
//! Every failed request ends in a rendered message, never in an unhandled
//! fault: the typed [`crate::recommender::ApiFailure`] collapses to a
//! single user-visible string at this boundary
//! ([`search_failure_message`], [`recommendation_failure_message`],
//! [`mood_failure_message`]), and the mood-selector controls always return
//! to idle after a request settles. No failure is retried; each command
//! invocation is a single attempt that leaves the session interactive.
//!
//! ## Progress and User Experience
//!
//! All in-flight requests show a spinner that is cleared on every exit
//! path before anything is rendered. Results print as a count header
//! followed by one card per song; errors print as a single warning line.

mod mood;
mod moods;
mod render;
mod search;

pub use mood::mood;
pub use mood::mood_failure_message;
pub use moods::moods;
pub use render::NO_RESULTS_MESSAGE;
pub use render::render_error;
pub use render::render_results;
pub use render::results_header;
pub use render::song_card;
pub use search::recommendation_failure_message;
pub use search::search;
pub use search::search_failure_message;
