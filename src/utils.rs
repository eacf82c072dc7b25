/// Trims a raw search input into a usable query. Empty and whitespace-only
/// input yields `None`; no request should be issued for it.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

/// Parses a comma-separated mood list into normalized mood identifiers.
///
/// Entries are trimmed and lower-cased; duplicates are dropped while the
/// first-seen order is preserved. Empty input and empty segments are
/// rejected with a descriptive error string, usable as a clap value parser
/// error.
pub fn parse_moods(raw: &str) -> Result<Vec<String>, String> {
    if raw.trim().is_empty() {
        return Err("mood list cannot be empty".to_string());
    }

    let mut moods: Vec<String> = Vec::new();
    for segment in raw.split(',') {
        let mood = segment.trim().to_lowercase();
        if mood.is_empty() {
            return Err(format!("mood list '{}' contains an empty segment", raw));
        }
        if !moods.contains(&mood) {
            moods.push(mood);
        }
    }

    Ok(moods)
}
