//! Result set rendering.
//!
//! `Tsv` prints the header and every value followed by a tab, NULL as
//! `null`, and nothing at all for an empty result. `Table` draws the same
//! data as a bordered table.

use crate::core::ResultSet;
use clap::ValueEnum;
use comfy_table::{Cell, Table as ComfyTable, presets::UTF8_FULL};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Table,
}

#[must_use]
pub fn render(result: &ResultSet, format: OutputFormat) -> String {
    if result.is_empty() {
        return String::new();
    }
    match format {
        OutputFormat::Tsv => render_tsv(result),
        OutputFormat::Table => render_table(result),
    }
}

fn render_tsv(result: &ResultSet) -> String {
    let mut out = String::new();
    for column in &result.columns {
        out.push_str(column);
        out.push('\t');
    }
    out.push('\n');

    for row in &result.rows {
        for value in &row.values {
            out.push_str(value.as_deref().unwrap_or("null"));
            out.push('\t');
        }
        out.push('\n');
    }
    out
}

fn render_table(result: &ResultSet) -> String {
    let mut table = ComfyTable::new();
    table.load_preset(UTF8_FULL);

    table.set_header(result.columns.iter().map(Cell::new));

    for row in &result.rows {
        table.add_row(
            row.values
                .iter()
                .map(|v| Cell::new(v.as_deref().map_or("null", str::trim_end))),
        );
    }

    format!("{table}\n")
}
