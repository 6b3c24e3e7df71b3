use reqwest::Client;

use crate::{
    config, formatter,
    spotify::FetchError,
    types::{RawAlbumWithTracks, TrackRecord},
};

/// Retrieves an album and formats its track listing.
///
/// The album endpoint returns tracks without their own album object, so the
/// album's name and artwork are attached to each track before normalization
/// (see [`formatter::normalize_album_tracks`]). Only the first page of tracks
/// embedded in the album response is returned.
///
/// # Arguments
///
/// * `album_id` - Spotify ID of the album
/// * `token` - Valid access token for Spotify API authentication
///
/// # Errors
///
/// Returns a [`FetchError`] classified the same way as top-items requests.
pub async fn get_album_tracks(album_id: &str, token: &str) -> Result<Vec<TrackRecord>, FetchError> {
    let api_url = format!(
        "{uri}/albums/{id}",
        uri = config::spotify_apiurl().trim_end_matches('/'),
        id = album_id
    );

    let response = Client::new()
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(FetchError::from_status(status, &body));
    }

    let album = serde_json::from_str::<RawAlbumWithTracks>(&body)?;
    Ok(formatter::normalize_album_tracks(&album))
}
