use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use log::LevelFilter;

use lookupcli::{cli, config, warning};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Log request diagnostics to stderr
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Frequency of a first name by decade in Brazil (IBGE)
    Names(NamesOptions),

    /// Current weather for a city (OpenWeather)
    Weather(WeatherOptions),

    /// Popularity and top tracks of an artist (Spotify)
    Artist(ArtistOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct NamesOptions {
    /// Name to look up; prompts for names when omitted
    pub name: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct WeatherOptions {
    /// City to look up; prompts for cities when omitted
    pub city: Option<String>,

    /// Language of the weather description
    #[clap(long)]
    pub lang: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    /// Artist to look up; prompts for artists when omitted
    pub name: Option<String>,

    /// ISO 3166-1 alpha-2 market for top tracks (overrides SPOTIFY_MARKET)
    #[clap(long)]
    pub market: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }
    let config = config::Config::from_env();
    log::debug!("{:?}", config);

    match cli.command {
        Command::Names(opt) => cli::names(&config, opt.name).await,
        Command::Weather(opt) => cli::weather(&config, opt.city, opt.lang).await,
        Command::Artist(opt) => cli::artist(&config, opt.name, opt.market).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
