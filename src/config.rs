//! Configuration management for the song recommendation CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration: the recommendation backend address and
//! the set of mood selectors offered to the user.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

use crate::{Res, utils};

/// Mood selectors offered when `RECOMMENDER_MOODS` is not set.
pub const DEFAULT_MOODS: &str = "happy,sad,energetic,calm";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `sorecli/.env`. This allows users to store
/// configuration without hardcoding values in their shell profile. A missing
/// `.env` file is not an error; variables may come from the environment
/// directly.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/sorecli/.env`
/// - macOS: `~/Library/Application Support/sorecli/.env`
/// - Windows: `%LOCALAPPDATA%/sorecli/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use sorecli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sorecli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
    }
    Ok(())
}

/// Returns the base URL of the recommendation backend.
///
/// Retrieves the `RECOMMENDER_API_URL` environment variable which contains
/// the base URL for the backend's `/search` and `/recommend` endpoints.
///
/// # Panics
///
/// Panics if the `RECOMMENDER_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = recommender_api_url(); // e.g., "http://localhost:8080"
/// ```
pub fn recommender_api_url() -> String {
    env::var("RECOMMENDER_API_URL").expect("RECOMMENDER_API_URL must be set")
}

/// Returns the configured mood selectors.
///
/// Retrieves the `RECOMMENDER_MOODS` environment variable, a comma-separated
/// list of mood identifiers, falling back to [`DEFAULT_MOODS`] when unset.
/// The list is validated and normalized by [`utils::parse_moods`]: entries
/// are trimmed, lower-cased and deduplicated while preserving order.
///
/// # Panics
///
/// Panics if `RECOMMENDER_MOODS` is set but is empty or contains empty
/// segments.
///
/// # Example
///
/// ```
/// let moods = moods(); // e.g., ["happy", "sad", "energetic", "calm"]
/// ```
pub fn moods() -> Vec<String> {
    let raw = env::var("RECOMMENDER_MOODS").unwrap_or_else(|_| DEFAULT_MOODS.to_string());
    utils::parse_moods(&raw).expect("RECOMMENDER_MOODS must be a comma-separated list of moods")
}
