// File: crates/csvchart-core/src/columns.rs
// Summary: Resolve requested X/Y column names against table headers with positional fallback.

use std::fmt;

use tracing::warn;

use crate::error::{ChartError, Result};
use crate::table::Table;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisRole {
    X,
    Y,
}

impl AxisRole {
    /// Header index used when no usable name was requested.
    pub const fn default_index(self) -> usize {
        match self {
            AxisRole::X => 0,
            AxisRole::Y => 1,
        }
    }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRole::X => f.write_str("X"),
            AxisRole::Y => f.write_str("Y"),
        }
    }
}

/// Final column pair used for a chart. Both names exist in the table headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub x: String,
    pub y: String,
}

/// Resolve both axes independently. Unknown names fall back to the default
/// position with a warning; only a missing default position is an error.
pub fn resolve_columns(table: &Table, x: Option<&str>, y: Option<&str>) -> Result<ResolvedColumns> {
    Ok(ResolvedColumns {
        x: resolve_column(table, x, AxisRole::X)?,
        y: resolve_column(table, y, AxisRole::Y)?,
    })
}

pub fn resolve_column(table: &Table, requested: Option<&str>, axis: AxisRole) -> Result<String> {
    if let Some(name) = requested.filter(|n| !n.trim().is_empty()) {
        if table.has_column(name) {
            return Ok(name.to_owned());
        }
        warn!(column = name, %axis, "column not found, using default column");
    }

    let index = axis.default_index();
    table
        .headers()
        .get(index)
        .cloned()
        .ok_or(ChartError::ColumnResolution { axis, index, available: table.column_count() })
}
