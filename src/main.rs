// Time Column Demo
// Loads a day scenario from TOML, lays out the column, prints the markup

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

use time_column::models::event::EventViewModel;
use time_column::models::matrix::PlacementMatrix;
use time_column::models::options::ColumnOptions;
use time_column::views::{FixedPanel, TimeColumn};

/// A full demo scenario: column configuration plus a flat list of events
/// with their pre-resolved matrix coordinates.
#[derive(Debug, Deserialize)]
struct Scenario {
    container_height: f64,
    column: ColumnOptions,
    #[serde(default)]
    events: Vec<ScenarioEvent>,
}

#[derive(Debug, Deserialize)]
struct ScenarioEvent {
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    #[serde(default)]
    has_collide: bool,
    #[serde(default)]
    extra_space: u32,
    color: Option<String>,
    #[serde(default)]
    matrix: usize,
    row: usize,
    col: usize,
}

/// Rebuild the nested placement matrices from the flat scenario list.
fn build_matrices(events: Vec<ScenarioEvent>) -> Result<Vec<PlacementMatrix>> {
    let mut matrices: Vec<PlacementMatrix> = Vec::new();
    for entry in events {
        let mut event = EventViewModel::new(&entry.title, entry.start, entry.end)
            .map_err(|e| anyhow::anyhow!("event {:?}: {}", entry.title, e))?;
        event.has_collide = entry.has_collide;
        event.extra_space = entry.extra_space;
        event.color = entry.color;

        if matrices.len() <= entry.matrix {
            matrices.resize(entry.matrix + 1, PlacementMatrix::default());
        }
        let matrix = &mut matrices[entry.matrix];
        if matrix.rows.len() <= entry.row {
            matrix.rows.resize(entry.row + 1, Vec::new());
        }
        let row = &mut matrix.rows[entry.row];
        if row.len() <= entry.col {
            row.resize(entry.col + 1, None);
        }
        row[entry.col] = Some(event);
    }
    Ok(matrices)
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut as_json = false;
    let mut path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            as_json = true;
        } else {
            path = Some(arg);
        }
    }

    let raw = match &path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("reading scenario file {p}"))?
        }
        None => include_str!("../demos/scenario.toml").to_string(),
    };
    let scenario: Scenario = toml::from_str(&raw).context("parsing scenario")?;

    log::info!(
        "laying out column {} for {}",
        scenario.column.index,
        scenario.column.ymd
    );

    let date_key = scenario.column.ymd.clone();
    let matrices = build_matrices(scenario.events)?;
    let mut column = TimeColumn::new(scenario.column, FixedPanel::new(scenario.container_height))?;

    if as_json {
        let annotated = column.layout_matrices(&date_key, matrices);
        println!("{}", serde_json::to_string_pretty(&annotated)?);
    } else {
        column.render(&date_key, matrices);
        print!("{}", column.container().markup);
    }

    Ok(())
}
