use sorecli::cli::{NO_RESULTS_MESSAGE, results_header, song_card};
use sorecli::types::Song;

// Helper function to create a test song
fn create_test_song(title: Option<&str>, artist: Option<&str>, score: Option<f64>) -> Song {
    Song {
        song_id: "s1".to_string(),
        title: title.map(|t| t.to_string()),
        artist: artist.map(|a| a.to_string()),
        score,
    }
}

#[test]
fn test_results_header_counts() {
    assert_eq!(results_header(1), "Found 1 recommendations:");
    assert_eq!(results_header(12), "Found 12 recommendations:");
}

#[test]
fn test_song_card_with_score() {
    let song = create_test_song(Some("Radio Ga Ga"), Some("Queen"), Some(0.91));
    let card = song_card(&song);

    assert!(card.contains("Radio Ga Ga"));
    assert!(card.contains("Artist: Queen"));
    assert!(card.contains("Score: 0.91"));
}

#[test]
fn test_song_card_score_formatted_to_two_decimals() {
    let song = create_test_song(Some("Radio Ga Ga"), Some("Queen"), Some(0.5));
    let card = song_card(&song);

    assert!(card.contains("Score: 0.50"));
}

#[test]
fn test_song_card_without_score_omits_score_line() {
    let song = create_test_song(Some("Bohemian Rhapsody"), Some("Queen"), None);
    let card = song_card(&song);

    assert!(!card.contains("Score:"));
}

#[test]
fn test_song_card_defaults_for_missing_metadata() {
    let song = create_test_song(None, None, Some(0.42));
    let card = song_card(&song);

    assert!(card.contains("Unknown Title"));
    assert!(card.contains("Artist: Unknown Artist"));
}

#[test]
fn test_song_card_line_order() {
    // Title first, then artist, then the optional score
    let song = create_test_song(Some("Radio Ga Ga"), Some("Queen"), Some(0.91));
    let card = song_card(&song);

    let title_pos = card.find("Radio Ga Ga").unwrap();
    let artist_pos = card.find("Artist:").unwrap();
    let score_pos = card.find("Score:").unwrap();
    assert!(title_pos < artist_pos);
    assert!(artist_pos < score_pos);
}

#[test]
fn test_no_results_message_wording() {
    assert_eq!(
        NO_RESULTS_MESSAGE,
        "No songs found. Try a different mood or search term."
    );
}
