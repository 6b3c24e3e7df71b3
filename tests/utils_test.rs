use spotop::cli::PageLimit;
use spotop::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, parse_page_size};
use spotop::spotify::top::SpotifyTopFetcher;
use spotop::types::{
    ArtistName, ArtistRecord, FetchStatus, NormalizedRecord, Query, ResultKind, TimeWindow,
    TrackRecord,
};
use spotop::utils::*;

fn create_test_track(title: &str, artists: &[&str], duration_ms: u64) -> TrackRecord {
    TrackRecord {
        id: None,
        title: title.to_string(),
        artists: artists
            .iter()
            .map(|name| ArtistName {
                name: name.to_string(),
            })
            .collect(),
        album_name: None,
        image_url: None,
        duration_ms,
        external_url: None,
        preview_url: None,
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    assert_eq!(verifier.len(), 128);
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let challenge = generate_code_challenge("test_verifier_123");

    assert!(!challenge.is_empty());
    assert_eq!(challenge, generate_code_challenge("test_verifier_123"));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_code_challenge_known_value() {
    // RFC 7636 appendix B
    assert_eq!(
        generate_code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk"),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(1_000), "0:01");
    assert_eq!(format_duration(215_000), "3:35");
    assert_eq!(format_duration(59_500), "1:00");
    assert_eq!(format_duration(59_499), "0:59");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_join_artist_names() {
    let track = create_test_track("Song", &["A", "B", "C"], 0);
    assert_eq!(join_artist_names(&track.artists), "A, B, C");
    assert_eq!(join_artist_names(&[]), "");
}

#[test]
fn test_track_row() {
    let mut track = create_test_track("Song", &["A", "B"], 125_000);
    let row = track_row(4, &track);
    assert_eq!(row.rank, 4);
    assert_eq!(row.title, "Song");
    assert_eq!(row.artists, "A, B");
    assert_eq!(row.album, PLACEHOLDER);
    assert_eq!(row.duration, "2:05");

    track.album_name = Some("Record".to_string());
    assert_eq!(track_row(1, &track).album, "Record");
}

#[test]
fn test_artist_row_uses_placeholder_without_image() {
    let artist = ArtistRecord {
        id: Some("ar1".to_string()),
        name: "Band".to_string(),
        image_url: None,
    };
    let row = artist_row(1, &artist);
    assert_eq!(row.image, PLACEHOLDER);
    assert_eq!(row.name, "Band");
}

#[test]
fn test_table_rows_continue_ranks() {
    let records = vec![
        NormalizedRecord::Track(create_test_track("One", &["A"], 1_000)),
        NormalizedRecord::Track(create_test_track("Two", &["B"], 2_000)),
    ];

    let (tracks, artists) = table_rows(&records, 21);

    assert!(artists.is_empty());
    assert_eq!(
        tracks.iter().map(|r| r.rank).collect::<Vec<_>>(),
        vec![21, 22]
    );
}

#[test]
fn test_parse_page_size() {
    assert_eq!(parse_page_size(None), DEFAULT_PAGE_SIZE);
    assert_eq!(parse_page_size(Some("10")), 10);
    assert_eq!(parse_page_size(Some(" 7 ")), 7);
    assert_eq!(parse_page_size(Some("0")), 1);
    assert_eq!(parse_page_size(Some("500")), MAX_PAGE_SIZE);
    assert_eq!(parse_page_size(Some("lots")), DEFAULT_PAGE_SIZE);
}

#[test]
fn test_page_url() {
    let fetcher = SpotifyTopFetcher::with_api_url("https://api.spotify.com/v1/");
    let query = Query::new(ResultKind::Artist, TimeWindow::ShortTerm);

    assert_eq!(
        fetcher.page_url(&query, 20, 40),
        "https://api.spotify.com/v1/me/top/artists?limit=20&offset=40&time_range=short_term"
    );
}

#[test]
fn test_query_defaults_and_labels() {
    let query = Query::default();
    assert_eq!(query.result_kind, ResultKind::Track);
    assert_eq!(query.window, TimeWindow::MediumTerm);
    assert_eq!(query.to_string(), "My Top Tracks (~6 Months)");
    assert_eq!(TimeWindow::LongTerm.as_param(), "long_term");
}

#[test]
fn test_page_limit_permits() {
    assert!(PageLimit::Pages(2).permits(0));
    assert!(PageLimit::Pages(2).permits(1));
    assert!(!PageLimit::Pages(2).permits(2));
    assert!(!PageLimit::Pages(0).permits(0));
    assert!(PageLimit::All.permits(1_000));
    assert!(PageLimit::Interactive.permits(3));
}

#[test]
fn test_terminal_statuses() {
    assert!(FetchStatus::Exhausted.is_terminal());
    assert!(FetchStatus::Failed.is_terminal());
    assert!(!FetchStatus::Idle.is_terminal());
    assert!(!FetchStatus::Loading.is_terminal());
}
