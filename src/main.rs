use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotcue::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
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
    /// Authorize with Spotify API and print a refresh token
    Auth,

    /// Run the redirect server (/auth, /callback, /devices)
    Serve,

    /// Search for a track
    Search(TrackOptions),

    /// Search for a track and play it
    Play(PlayOptions),

    /// Resume playback on the active device
    Resume,

    /// Pause playback on the active device
    Pause,

    /// List available playback devices
    Devices,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TrackOptions {
    /// Track title
    pub title: String,

    /// Restrict the search to an artist
    #[clap(long)]
    pub artist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    #[command(flatten)]
    pub track: TrackOptions,

    /// Device to play on (defaults to DEVICE_ID, then the active device)
    #[clap(long)]
    pub device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    match cli.command {
        Command::Auth => cli::auth(config).await,
        Command::Serve => cli::serve(config).await,
        Command::Search(opt) => cli::search(&config, &opt.title, opt.artist.as_deref()).await,
        Command::Play(opt) => {
            cli::play(
                &config,
                &opt.track.title,
                opt.track.artist.as_deref(),
                opt.device.as_deref(),
            )
            .await
        }
        Command::Resume => cli::resume(&config).await,
        Command::Pause => cli::pause(&config).await,
        Command::Devices => cli::devices(&config).await,
        Command::Completions(_) => {}
    }
}
