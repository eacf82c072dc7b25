//! Build script for the song recommendation CLI.
//!
//! Copies the configuration template from the crate root into the user's
//! local data directory during compilation, so a ready-to-edit example of
//! the expected environment variables is available in the location where
//! the application looks for its `.env` file.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the platform-specific
/// local data directory (`sorecli/.env.example`).
///
/// # Destination Location
///
/// - Linux: `~/.local/share/sorecli/.env.example`
/// - macOS: `~/Library/Application Support/sorecli/.env.example`
/// - Windows: `%LOCALAPPDATA%/sorecli/.env.example`
///
/// # Error Handling Strategy
///
/// A missing template only issues a cargo warning so the build still
/// succeeds; directory creation or copy failures are critical and abort
/// the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (the local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("sorecli");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
