//! # CLI Module
//!
//! The command layer of lookupcli. Every command follows the same pipeline:
//!
//! ```text
//! Input Collector (argument or prompt)
//!     ↓
//! API Client (IBGE / OpenWeather / Spotify)
//!     ↓
//! Response Mapper (crate::mapping)
//!     ↓
//! Presenter (render / warning → View)
//! ```
//!
//! ## Commands
//!
//! - [`names`] - Name frequency by decade in Brazil, as a table and a bar chart
//! - [`weather`] - Current weather metrics for a city
//! - [`artist`] - Spotify popularity and top tracks of an artist
//!
//! ## Input Modes
//!
//! With a query argument a command runs exactly one cycle. Without one it
//! prompts and runs a fresh cycle for every line until end of input; blank
//! lines leave the cycle idle and never reach the API.
//!
//! ## Output
//!
//! Rendered pages go to stdout. "No data" outcomes print one warning naming
//! the query. Causes of failed requests are only written to the operator log.

mod artist;
mod names;
mod prompt;
mod weather;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    pipeline::{self, Lookup, Outcome, Phase},
    view::View,
};

pub use artist::artist;
pub use names::names;
pub use prompt::Prompt;
pub use weather::weather;

/// Presenters, exposed so rendering can be checked without a terminal.
pub mod present {
    pub use super::artist::{
        present as artist, render as render_artist, warning as artist_warning,
    };
    pub use super::names::{present as names, render as render_names, warning as names_warning};
    pub use super::weather::{
        present as weather, render as render_weather, warning as weather_warning,
    };
}

async fn drive<L, P>(lookup: &L, query: Option<String>, label: &str, present: P)
where
    L: Lookup,
    P: Fn(&Outcome<L::Record>) -> View,
{
    match query {
        Some(query) => cycle(lookup, &query, &present).await,
        None => {
            let mut prompt = Prompt::stdin(label);
            while let Some(query) = prompt.next_query().await {
                cycle(lookup, &query, &present).await;
            }
        }
    }
}

async fn cycle<L, P>(lookup: &L, query: &str, present: &P)
where
    L: Lookup,
    P: Fn(&Outcome<L::Record>) -> View,
{
    let mut pb: Option<ProgressBar> = None;

    let outcome = pipeline::run_cycle(lookup, query, |phase| {
        log::debug!("Cycle phase: {}", phase);
        match phase {
            Phase::Querying => pb = Some(spinner(format!("Looking up {}...", query.trim()))),
            _ => {
                if let Some(pb) = pb.take() {
                    pb.finish_and_clear();
                }
            }
        }
    })
    .await;

    present(&outcome).show();
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
