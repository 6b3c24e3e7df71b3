//! Normalization of provider pages into the records the presentation consumes.
//!
//! Everything here is pure: the same page always yields the same records, in
//! the same order, one record per provider item. Missing optional fields turn
//! into `None`, never into an error.

use crate::types::{
    ArtistName, ArtistRecord, NormalizedRecord, RawAlbum, RawAlbumWithTracks, RawImage, RawItem,
    RawPage, ResultKind, TrackRecord,
};

/// Maps every item of `page` to the record variant selected by `kind`.
pub fn normalize(page: &RawPage, kind: ResultKind) -> Vec<NormalizedRecord> {
    page.items
        .iter()
        .map(|item| match kind {
            ResultKind::Track => NormalizedRecord::Track(normalize_track(item)),
            ResultKind::Artist => NormalizedRecord::Artist(normalize_artist(item)),
        })
        .collect()
}

/// Artwork is the first image of the track's album.
pub fn normalize_track(item: &RawItem) -> TrackRecord {
    let artists = item
        .artists
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|artist| ArtistName {
            name: artist.name.clone().unwrap_or_default(),
        })
        .collect();

    TrackRecord {
        id: item.id.clone(),
        title: item.name.clone().unwrap_or_default(),
        artists,
        album_name: item.album.as_ref().and_then(|album| album.name.clone()),
        image_url: item
            .album
            .as_ref()
            .and_then(|album| first_image_url(album.images.as_deref())),
        duration_ms: item.duration_ms.unwrap_or_default(),
        external_url: item
            .external_urls
            .as_ref()
            .and_then(|urls| urls.spotify.clone()),
        preview_url: item.preview_url.clone(),
    }
}

pub fn normalize_artist(item: &RawItem) -> ArtistRecord {
    ArtistRecord {
        id: item.id.clone(),
        name: item.name.clone().unwrap_or_default(),
        image_url: first_image_url(item.images.as_deref()),
    }
}

/// Album track listings carry no album object per track, so the album's own
/// name and images are attached to each track before formatting.
pub fn normalize_album_tracks(album: &RawAlbumWithTracks) -> Vec<TrackRecord> {
    let shared = RawAlbum {
        id: album.id.clone(),
        name: album.name.clone(),
        images: album.images.clone(),
    };

    album
        .tracks
        .items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            item.album = Some(shared.clone());
            normalize_track(&item)
        })
        .collect()
}

fn first_image_url(images: Option<&[RawImage]>) -> Option<String> {
    images
        .and_then(|images| images.first())
        .and_then(|image| image.url.clone())
}
