//! The per-query lookup cycle.
//!
//! Every query runs the same four stages from scratch:
//!
//! ```text
//! Idle ──(non-empty query)──> Querying ──> Rendered
//!                                     └──> Empty
//! ```
//!
//! Nothing survives between cycles; a new query starts again at `Idle`.

use std::fmt;

/// A source of records for one kind of query.
///
/// Implemented by the API clients; `None` is the absent-result sentinel and
/// covers both failed calls and calls that found nothing.
#[allow(async_fn_in_trait)]
pub trait Lookup {
    type Record;

    async fn fetch(&self, query: &str) -> Option<Self::Record>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Querying,
    Rendered,
    Empty,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Idle => "idle",
            Phase::Querying => "querying",
            Phase::Rendered => "rendered",
            Phase::Empty => "empty",
        };
        write!(f, "{}", s)
    }
}

/// Result of one cycle. `Querying` is transient and never an outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R> {
    Idle,
    Rendered { query: String, record: R },
    Empty { query: String },
}

impl<R> Outcome<R> {
    pub fn phase(&self) -> Phase {
        match self {
            Outcome::Idle => Phase::Idle,
            Outcome::Rendered { .. } => Phase::Rendered,
            Outcome::Empty { .. } => Phase::Empty,
        }
    }

    pub fn record(&self) -> Option<&R> {
        match self {
            Outcome::Rendered { record, .. } => Some(record),
            _ => None,
        }
    }
}

/// Runs one full cycle for `query`.
///
/// Blank queries stop at `Idle` without touching `lookup`. `observer` sees
/// every phase the cycle enters, in order.
pub async fn run_cycle<L, F>(lookup: &L, query: &str, mut observer: F) -> Outcome<L::Record>
where
    L: Lookup,
    F: FnMut(Phase),
{
    let query = query.trim();
    if query.is_empty() {
        observer(Phase::Idle);
        return Outcome::Idle;
    }

    observer(Phase::Querying);
    let outcome = match lookup.fetch(query).await {
        Some(record) => Outcome::Rendered {
            query: query.to_string(),
            record,
        },
        None => Outcome::Empty {
            query: query.to_string(),
        },
    };

    observer(outcome.phase());
    outcome
}
