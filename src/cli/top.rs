use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, info,
    management::{CachedCredential, RequestOutcome, TopListManager},
    spotify::top::SpotifyTopFetcher,
    success,
    types::{FetchStatus, NormalizedRecord, Query, ResultKind, TimeWindow},
    utils, warning,
};

/// How far `top` pages before it stops on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLimit {
    Pages(u32),
    All,
    /// Ask before each further page.
    Interactive,
}

impl PageLimit {
    /// Whether another page may be requested once `loaded` pages are shown.
    /// The interactive limit is settled by the prompt instead.
    pub fn permits(&self, loaded: u32) -> bool {
        match self {
            PageLimit::Pages(max) => loaded < *max,
            PageLimit::All | PageLimit::Interactive => true,
        }
    }
}

/// Lists the user's top tracks or artists, one table per fetched page.
///
/// Sets the query, then keeps requesting pages until the listing is exhausted,
/// a request fails, or `limit` says to stop. Rank numbers continue across pages.
pub async fn top(kind: ResultKind, window: TimeWindow, limit: PageLimit) {
    let credentials = CachedCredential::load().await;
    if !credentials.is_signed_in().await {
        error!("Failed to load token. Please run spotop auth");
    }

    let query = Query::new(kind, window);
    let manager = TopListManager::with_page_size(
        query,
        SpotifyTopFetcher::new(),
        credentials,
        config::page_size(),
    );
    manager.set_query(query).await;

    info!("{}", query);

    let mut printed = 0usize;
    let mut pages = 0u32;

    loop {
        if !limit.permits(pages) {
            return;
        }

        let pb = spinner(&format!("Fetching page {}...", pages + 1));
        let outcome = manager.request_next_page().await;
        pb.finish_and_clear();

        match outcome {
            RequestOutcome::Loaded { .. } => {
                let fresh = manager.records_from(printed).await;
                print_rows(&fresh, printed + 1);
                printed += fresh.len();
                pages += 1;
            }
            RequestOutcome::Failed(e) => {
                warning!("Request failed: {}", e);
                warning!("Run the command again to retry.");
                return;
            }
            RequestOutcome::NoCredential => {
                error!("No access token available. Please run spotop auth");
            }
            RequestOutcome::Ignored | RequestOutcome::Discarded => {}
        }

        let status = manager.status().await;
        if status.is_terminal() {
            if status == FetchStatus::Exhausted {
                if printed == 0 {
                    info!("Nothing to show for this time range yet.");
                } else {
                    success!("No more results ({} total).", printed);
                }
            }
            return;
        }

        if limit == PageLimit::Interactive && !confirm_more() {
            return;
        }
    }
}

fn print_rows(records: &[NormalizedRecord], first_rank: usize) {
    let (tracks, artists) = utils::table_rows(records, first_rank);
    if !tracks.is_empty() {
        println!("{}", Table::new(tracks));
    }
    if !artists.is_empty() {
        println!("{}", Table::new(artists));
    }
}

fn confirm_more() -> bool {
    print!("Load more? [Y/n] ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => {
            let answer = answer.trim().to_lowercase();
            answer.is_empty() || answer == "y" || answer == "yes"
        }
    }
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
