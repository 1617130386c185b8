use crate::{pipeline::Outcome, warning};

/// What one cycle puts on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// No query; nothing is printed.
    Idle,
    /// Fully rendered record.
    Page(String),
    /// The single warning shown when a query produced no data.
    Warning(String),
}

impl View {
    /// Maps an outcome to a view with the app-specific renderers.
    pub fn from_outcome<R, P, W>(outcome: &Outcome<R>, render: P, warn: W) -> Self
    where
        P: FnOnce(&str, &R) -> String,
        W: FnOnce(&str) -> String,
    {
        match outcome {
            Outcome::Idle => View::Idle,
            Outcome::Rendered { query, record } => View::Page(render(query, record)),
            Outcome::Empty { query } => View::Warning(warn(query)),
        }
    }

    pub fn show(&self) {
        match self {
            View::Idle => {}
            View::Page(page) => println!("{}", page),
            View::Warning(message) => warning!("{}", message),
        }
    }
}
