use crate::{success, types::Song, warning};

/// Shown when a request succeeds but carries no songs to display.
pub const NO_RESULTS_MESSAGE: &str = "No songs found. Try a different mood or search term.";

/// Renders a result set, replacing whatever was displayed before.
///
/// An empty sequence is an error path: it delegates to [`render_error`]
/// with [`NO_RESULTS_MESSAGE`] instead of printing an empty region. The
/// backend's ranking order is preserved as-is.
pub fn render_results(songs: &[Song]) {
    if songs.is_empty() {
        render_error(NO_RESULTS_MESSAGE);
        return;
    }

    success!("{}", results_header(songs.len()));
    for song in songs {
        println!("{}", song_card(song));
    }
}

/// Renders a single error message in place of any prior results.
pub fn render_error(message: &str) {
    warning!("{}", message);
}

pub fn results_header(count: usize) -> String {
    format!("Found {} recommendations:", count)
}

/// One display card per song: title, artist, and the relevance score to
/// two decimal places when the backend supplied one. Missing metadata
/// falls back to "Unknown Title" / "Unknown Artist".
pub fn song_card(song: &Song) -> String {
    let title = song.title.as_deref().unwrap_or("Unknown Title");
    let artist = song.artist.as_deref().unwrap_or("Unknown Artist");

    let mut card = format!("    {}\n      Artist: {}", title, artist);
    if let Some(score) = song.score {
        card.push_str(&format!("\n      Score: {:.2}", score));
    }
    card
}
