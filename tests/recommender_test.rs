use reqwest::StatusCode;
use sorecli::recommender::{ApiFailure, NotFoundReason, classify_response};
use sorecli::types::{Algorithm, GraphType, RecommendationRequest, Song};

#[test]
fn test_classify_response_song_array() {
    let body = r#"[{"songId":"s1","title":"Bohemian Rhapsody","artist":"Queen"}]"#;
    let songs = classify_response(StatusCode::OK, body).unwrap();

    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].song_id, "s1");
    assert_eq!(songs[0].title.as_deref(), Some("Bohemian Rhapsody"));
    assert_eq!(songs[0].artist.as_deref(), Some("Queen"));
    assert_eq!(songs[0].score, None);
}

#[test]
fn test_classify_response_preserves_backend_order() {
    // Ranking comes from the backend and must not be re-sorted
    let body = r#"[
        {"songId":"s2","title":"Radio Ga Ga","artist":"Queen","score":0.91},
        {"songId":"s3","title":"Under Pressure","artist":"Queen","score":0.95}
    ]"#;
    let songs = classify_response(StatusCode::OK, body).unwrap();

    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].song_id, "s2");
    assert_eq!(songs[1].song_id, "s3");
    assert_eq!(songs[0].score, Some(0.91));
}

#[test]
fn test_classify_response_message_object() {
    // A 200 with a message object is an explicit no-match, not a success
    let body = r#"{"message":"no match"}"#;
    let failure = classify_response(StatusCode::OK, body).unwrap_err();

    match failure {
        ApiFailure::NotFound { reason, message } => {
            assert_eq!(reason, NotFoundReason::NoMatch);
            assert_eq!(message, "no match");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_classify_response_empty_array() {
    let failure = classify_response(StatusCode::OK, "[]").unwrap_err();

    assert!(matches!(failure, ApiFailure::NoResults));
    // NoResults is the only failure without a carried message
    assert_eq!(failure.message(), None);
}

#[test]
fn test_classify_response_http_error_with_body() {
    let failure = classify_response(StatusCode::INTERNAL_SERVER_ERROR, "boom").unwrap_err();

    match failure {
        ApiFailure::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Http, got {:?}", other),
    }
}

#[test]
fn test_classify_response_http_error_without_body() {
    // An empty body falls back to a status-derived message
    let failure = classify_response(StatusCode::SERVICE_UNAVAILABLE, "").unwrap_err();

    match failure {
        ApiFailure::Http { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "HTTP error! status: 503");
        }
        other => panic!("expected Http, got {:?}", other),
    }
}

#[test]
fn test_classify_response_unknown_mood() {
    // The backend's free-text mood marker is classified at this boundary
    let body = "No songs found with mood happy";
    let failure = classify_response(StatusCode::NOT_FOUND, body).unwrap_err();

    match failure {
        ApiFailure::NotFound { reason, message } => {
            assert_eq!(reason, NotFoundReason::UnknownMood);
            assert_eq!(message, "No songs found with mood happy");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_classify_response_malformed_json() {
    let failure = classify_response(StatusCode::OK, "not json at all").unwrap_err();

    assert!(matches!(failure, ApiFailure::Transport(_)));
}

#[test]
fn test_failure_display_shows_carried_message() {
    let failure = ApiFailure::Transport("connection refused".to_string());
    assert_eq!(failure.to_string(), "connection refused");

    let failure = ApiFailure::Http {
        status: 500,
        message: "boom".to_string(),
    };
    assert_eq!(failure.to_string(), "boom");
}

#[test]
fn test_graph_type_display() {
    // Exact wire tokens
    assert_eq!(GraphType::ArtistBased.to_string(), "ARTIST_BASED");
    assert_eq!(GraphType::MoodBased.to_string(), "MOOD_BASED");
}

#[test]
fn test_algorithm_display() {
    // Exact wire tokens
    assert_eq!(Algorithm::Bfs.to_string(), "BFS");
    assert_eq!(Algorithm::Dijkstra.to_string(), "DIJKSTRA");
}

#[test]
fn test_recommendation_request_artist_based() {
    let request = RecommendationRequest::artist_based("s1".to_string());

    assert_eq!(request.subject_id, "s1");
    assert_eq!(request.graph_type, GraphType::ArtistBased);
    assert_eq!(request.algorithm, Algorithm::Bfs);
}

#[test]
fn test_recommendation_request_mood_based() {
    let request = RecommendationRequest::mood_based("happy".to_string());

    assert_eq!(request.subject_id, "happy");
    assert_eq!(request.graph_type, GraphType::MoodBased);
    assert_eq!(request.algorithm, Algorithm::Dijkstra);
}

#[test]
fn test_song_decode_minimal() {
    // Only songId is required on the wire
    let song: Song = serde_json::from_str(r#"{"songId":"s9"}"#).unwrap();

    assert_eq!(song.song_id, "s9");
    assert_eq!(song.title, None);
    assert_eq!(song.artist, None);
    assert_eq!(song.score, None);
}

#[test]
fn test_song_decode_with_score() {
    let song: Song =
        serde_json::from_str(r#"{"songId":"s2","title":"Radio Ga Ga","artist":"Queen","score":0.91}"#)
            .unwrap();

    assert_eq!(song.song_id, "s2");
    assert_eq!(song.score, Some(0.91));
}
