use sorecli::utils::*;

#[test]
fn test_normalize_query_trims_whitespace() {
    let query = normalize_query("  bohemian rhapsody  ");
    assert_eq!(query, Some("bohemian rhapsody".to_string()));
}

#[test]
fn test_normalize_query_empty_input() {
    // Empty and whitespace-only input must not produce a query
    assert_eq!(normalize_query(""), None);
    assert_eq!(normalize_query("   "), None);
    assert_eq!(normalize_query("\t\n"), None);
}

#[test]
fn test_normalize_query_preserves_interior_whitespace() {
    // Only the edges are trimmed
    let query = normalize_query(" radio  ga ga ");
    assert_eq!(query, Some("radio  ga ga".to_string()));
}

#[test]
fn test_parse_moods_single() {
    let moods = parse_moods("happy").unwrap();
    assert_eq!(moods, vec!["happy"]);
}

#[test]
fn test_parse_moods_multiple_with_spaces() {
    let moods = parse_moods("happy, sad , energetic").unwrap();
    assert_eq!(moods, vec!["happy", "sad", "energetic"]);
}

#[test]
fn test_parse_moods_case_insensitivity() {
    let moods = parse_moods("HAPPY,Sad").unwrap();
    assert_eq!(moods, vec!["happy", "sad"]);
}

#[test]
fn test_parse_moods_deduplication() {
    // Duplicates are dropped, first occurrence wins
    let moods = parse_moods("happy,sad,happy,HAPPY").unwrap();
    assert_eq!(moods, vec!["happy", "sad"]);
}

#[test]
fn test_parse_moods_preserves_order() {
    let moods = parse_moods("calm,energetic,happy").unwrap();
    assert_eq!(moods, vec!["calm", "energetic", "happy"]);
}

#[test]
fn test_parse_moods_invalid_inputs() {
    // Test empty string
    let result = parse_moods("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test whitespace only
    let result = parse_moods("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test malformed input (empty segment)
    let result = parse_moods("happy,,sad");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("empty segment"));

    // Test trailing comma
    let result = parse_moods("happy,");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("empty segment"));
}
