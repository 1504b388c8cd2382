//! Rendering of match outcomes for the terminal and for JSON consumers.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use postmatch_core::RankedCandidate;
use postmatch_model::{MatchResult, SubscriberRecord};
use serde::Serialize;

/// Outcome status as exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    MatchFound,
    NotFound,
}

/// The subscriber fields a confirmation screen needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriberSummary {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl From<&SubscriberRecord> for SubscriberSummary {
    fn from(record: &SubscriberRecord) -> Self {
        Self {
            name: record.display_name().to_string(),
            email: record.email.clone(),
            address: record.address.clone(),
        }
    }
}

/// Report for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub status: MatchStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<SubscriberSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub extracted_address: String,
}

impl MatchReport {
    pub fn new(query: &str, result: &MatchResult) -> Self {
        match result {
            MatchResult::Match { record, score } => Self {
                status: MatchStatus::MatchFound,
                message: "A subscriber matches the address".to_string(),
                subscriber: Some(SubscriberSummary::from(record)),
                score: Some(*score),
                extracted_address: query.to_string(),
            },
            MatchResult::NoMatch => Self {
                status: MatchStatus::NotFound,
                message: "No matching subscriber found for the address".to_string(),
                subscriber: None,
                score: None,
                extracted_address: query.to_string(),
            },
        }
    }

    pub fn is_match(&self) -> bool {
        self.status == MatchStatus::MatchFound
    }

    /// Plain-text rendering for terminal output.
    pub fn to_text(&self) -> String {
        match (&self.subscriber, self.score) {
            (Some(subscriber), Some(score)) => format!(
                "Match found: {} <{}>\nAddress: {}\nScore: {}\nQuery: {}",
                subscriber.name,
                subscriber.email,
                subscriber.address,
                format_score(score),
                self.extracted_address
            ),
            _ => format!("No matching subscriber found.\nQuery: {}", self.extracted_address),
        }
    }
}

pub fn format_score(score: f64) -> String {
    format!("{score:.3}")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn score_cell(score: Option<f64>, matched: bool) -> Cell {
    match score {
        Some(score) if matched => Cell::new(format_score(score)).fg(Color::Green),
        Some(score) => Cell::new(format_score(score)).fg(Color::Yellow),
        None => dim_cell("-"),
    }
}

/// Table of batch results, one row per query.
pub fn batch_table(reports: &[MatchReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Query"),
        header_cell("Subscriber"),
        header_cell("Email"),
        header_cell("Score"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (index, report) in reports.iter().enumerate() {
        let (name, email) = match &report.subscriber {
            Some(subscriber) => (Cell::new(&subscriber.name), Cell::new(&subscriber.email)),
            None => (dim_cell("no match"), dim_cell("-")),
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&report.extracted_address),
            name,
            email,
            score_cell(report.score, report.is_match()),
        ]);
    }
    table
}

/// Table of ranked candidates with their score breakdown.
pub fn rank_table(ranked: &[RankedCandidate<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Row"),
        header_cell("Subscriber"),
        header_cell("Address"),
        header_cell("Score"),
        header_cell("Explanation"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (rank, candidate) in ranked.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(candidate.position + 1),
            Cell::new(candidate.record.display_name()),
            Cell::new(&candidate.record.address),
            score_cell(Some(candidate.score.score), candidate.above_threshold),
            dim_cell(candidate.score.explain()),
        ]);
    }
    table
}

/// Table listing roster entries in matching order.
pub fn roster_table(roster: &[SubscriberRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Name"),
        header_cell("Email"),
        header_cell("Address"),
        header_cell("City"),
        header_cell("Postal code"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, record) in roster.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(record.display_name()),
            Cell::new(&record.email),
            Cell::new(&record.address),
            optional_cell(record.city.as_deref()),
            optional_cell(record.postal_code.as_deref()),
        ]);
    }
    table
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}
