use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{
    ArtistName, ArtistRecord, ArtistTableRow, NormalizedRecord, TrackRecord, TrackTableRow,
};

/// Shown instead of artwork or other values the provider did not supply.
pub const PLACEHOLDER: &str = "-";

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Formats milliseconds as `m:ss`, rounding to the nearest second.
pub fn format_duration(millis: u64) -> String {
    let total_seconds = (millis + 500) / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub fn join_artist_names(artists: &[ArtistName]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn track_row(rank: usize, track: &TrackRecord) -> TrackTableRow {
    TrackTableRow {
        rank,
        title: track.title.clone(),
        artists: join_artist_names(&track.artists),
        album: track
            .album_name
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        duration: format_duration(track.duration_ms),
    }
}

pub fn artist_row(rank: usize, artist: &ArtistRecord) -> ArtistTableRow {
    ArtistTableRow {
        rank,
        name: artist.name.clone(),
        image: artist
            .image_url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    }
}

/// Splits records into table rows, numbering them from `first_rank`.
///
/// A listing only ever holds one kind, but both vectors are returned so the
/// caller never has to assume it.
pub fn table_rows(
    records: &[NormalizedRecord],
    first_rank: usize,
) -> (Vec<TrackTableRow>, Vec<ArtistTableRow>) {
    let mut tracks = Vec::new();
    let mut artists = Vec::new();
    for (i, record) in records.iter().enumerate() {
        match record {
            NormalizedRecord::Track(t) => tracks.push(track_row(first_rank + i, t)),
            NormalizedRecord::Artist(a) => artists.push(artist_row(first_rank + i, a)),
        }
    }
    (tracks, artists)
}
