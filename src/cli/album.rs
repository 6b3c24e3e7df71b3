use tabled::Table;

use crate::{
    cli::top::spinner,
    error, info,
    management::{CachedCredential, CredentialProvider},
    spotify, utils, warning,
};

/// Prints the tracks of one album in the same layout as `top --type tracks`.
pub async fn album(album_id: String) {
    let credentials = CachedCredential::load().await;
    let Some(token) = credentials.credential().await else {
        error!("Failed to load token. Please run spotop auth");
    };

    let pb = spinner("Fetching album tracks...");
    let result = spotify::album::get_album_tracks(&album_id, &token).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) if tracks.is_empty() => info!("Album {} has no tracks.", album_id),
        Ok(tracks) => {
            if let Some(name) = tracks.first().and_then(|t| t.album_name.as_ref()) {
                info!("{}", name);
            }
            let rows: Vec<_> = tracks
                .iter()
                .enumerate()
                .map(|(i, t)| utils::track_row(i + 1, t))
                .collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => warning!("Failed to load album {}: {}", album_id, e),
    }
}
