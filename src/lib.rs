//! Data Lookup CLI Library
//!
//! This library backs three small lookup tools that share one shape: read a
//! query, call a third-party REST API, reshape the JSON into a flat record and
//! print it. The tools are a Brazilian name-frequency-by-decade viewer (IBGE),
//! a current-weather viewer (OpenWeather) and a Spotify artist/top-tracks
//! viewer.
//!
//! # Modules
//!
//! - `cli` - Command implementations and presenters
//! - `config` - Environment loading and the startup configuration object
//! - `errors` - Error types for the API boundary, auth and configuration
//! - `http` - Shared request helpers for the API clients
//! - `ibge` - IBGE census names client
//! - `mapping` - Response mappers from raw JSON to records
//! - `openweather` - OpenWeather current-conditions client
//! - `pipeline` - The per-query lookup cycle and its state machine
//! - `spotify` - Spotify Web API client (client-credentials auth, search, top tracks)
//! - `types` - Records and table rows
//! - `utils` - Formatting helpers
//! - `view` - Rendered output of a cycle
//!
//! # Example
//!
//! ```
//! use lookupcli::{config, ibge::IbgeClient, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), String> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env();
//!     let client = IbgeClient::new(&config);
//!     let outcome = pipeline::run_cycle(&client, "Maria", |_| {}).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod http;
pub mod ibge;
pub mod mapping;
pub mod openweather;
pub mod pipeline;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod view;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Names by Decade in Brazil");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal conditions such as a failed Spotify authentication: the
/// process terminates with exit code 1 right after printing.
///
/// # Example
///
/// ```
/// error!("Authentication failed: {}", err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for the "no data" outcome of a lookup, which is not fatal.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
