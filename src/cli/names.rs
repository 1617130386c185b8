use tabled::Table;

use crate::{
    config::Config,
    ibge::{self, IbgeClient},
    info,
    pipeline::Outcome,
    types::{DecadeTableRow, NameFrequencyRecord},
    utils,
    view::View,
};

const CHART_WIDTH: usize = 40;

/// Looks up how often a first name was registered per decade in Brazil.
///
/// Runs once for `name`, or prompts for names until end of input when no
/// name is given.
pub async fn names(config: &Config, name: Option<String>) {
    info!("Names by Decade in Brazil");
    info!("IBGE data (source: {})", ibge::SOURCE);

    let client = IbgeClient::new(config);
    super::drive(&client, name, "Search for a name: ", present).await;
}

pub fn present(outcome: &Outcome<NameFrequencyRecord>) -> View {
    View::from_outcome(outcome, render, warning)
}

/// Frequency table followed by a horizontal bar chart of the same data.
pub fn render(_name: &str, record: &NameFrequencyRecord) -> String {
    let rows: Vec<DecadeTableRow> = record
        .decades()
        .iter()
        .map(|d| DecadeTableRow {
            decade: d.decade.clone(),
            frequency: d.count,
        })
        .collect();

    let label_width = record
        .decades()
        .iter()
        .map(|d| d.decade.chars().count())
        .max()
        .unwrap_or(0);
    let max = record.max_count();

    let mut lines = vec![
        "Frequency by decade".to_string(),
        Table::new(rows).to_string(),
        String::new(),
        "Evolution over time".to_string(),
    ];
    lines.extend(record.decades().iter().map(|d| {
        format!(
            "{:<width$} │{} {}",
            d.decade,
            "█".repeat(utils::bar_width(d.count, max, CHART_WIDTH)),
            d.count,
            width = label_width
        )
    }));

    lines.join("\n")
}

pub fn warning(name: &str) -> String {
    format!("No data found for the name {}", name)
}
