use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotop::{
    cli::{self, PageLimit},
    config, error,
    types::{PkceToken, ResultKind, TimeWindow},
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default())
        .placeholder(AnsiColor::BrightBlue.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Show your top tracks or artists
    Top(TopOptions),

    /// List the tracks of an album
    Album(AlbumOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    /// What to rank
    #[clap(long = "type", value_enum, default_value_t = ResultKind::Track)]
    pub kind: ResultKind,

    /// Time range the ranking is computed over
    #[clap(long, value_enum, default_value_t = TimeWindow::MediumTerm)]
    pub range: TimeWindow,

    /// Number of pages to load
    #[clap(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        conflicts_with_all = ["all", "interactive"]
    )]
    pub pages: u32,

    /// Load every page
    #[clap(long, conflicts_with = "interactive")]
    pub all: bool,

    /// Ask before loading each further page
    #[clap(long)]
    pub interactive: bool,
}

impl TopOptions {
    fn page_limit(&self) -> PageLimit {
        if self.all {
            PageLimit::All
        } else if self.interactive {
            PageLimit::Interactive
        } else {
            PageLimit::Pages(self.pages)
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    /// Spotify ID of the album
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Top(opt) => cli::top(opt.kind, opt.range, opt.page_limit()).await,
        Command::Album(opt) => cli::album(opt.id).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
