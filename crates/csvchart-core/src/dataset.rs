// File: crates/csvchart-core/src/dataset.rs
// Summary: Chart datasets built from table rows, one shape per chart kind.
// Notes:
// - Bar/Line keep every row as its own entry, duplicate labels included.
// - Pie overwrites the value of a repeated label (last write wins) but keeps
//   the label at the position where it first appeared.
// - Scatter keeps x and y in lockstep; a row is only taken when both parse.

use tracing::warn;

use crate::columns::ResolvedColumns;
use crate::kind::ChartKind;
use crate::table::{Row, Table};
use crate::types::{CATEGORY_SERIES_NAME, XY_SERIES_NAME};

/// Ordered `(label, value)` pairs for bar and line charts.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySeries {
    pub name: String,
    pub entries: Vec<(String, f64)>,
}

impl CategorySeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), entries: Vec::new() }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.entries.push((label.into(), value));
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }
}

/// Label to value mapping for pie charts, in first-insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PieDataset {
    slices: Vec<(String, f64)>,
}

impl PieDataset {
    pub fn new() -> Self { Self::default() }

    /// Set `label` to `value`, replacing any earlier value for the same label.
    pub fn set(&mut self, label: impl Into<String>, value: f64) {
        let label = label.into();
        match self.slices.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = value,
            None => self.slices.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.slices.iter().find(|(l, _)| l == label).map(|(_, v)| *v)
    }

    pub fn slices(&self) -> &[(String, f64)] { &self.slices }
    pub fn len(&self) -> usize { self.slices.len() }
    pub fn is_empty(&self) -> bool { self.slices.is_empty() }
}

/// Parallel numeric sequences for scatter charts.
#[derive(Clone, Debug, PartialEq)]
pub struct XyDataset {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl XyDataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), x: Vec::new(), y: Vec::new() }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Dataset {
    Bar(CategorySeries),
    Line(CategorySeries),
    Pie(PieDataset),
    Scatter(XyDataset),
}

impl Dataset {
    pub fn kind(&self) -> ChartKind {
        match self {
            Dataset::Bar(_) => ChartKind::Bar,
            Dataset::Line(_) => ChartKind::Line,
            Dataset::Pie(_) => ChartKind::Pie,
            Dataset::Scatter(_) => ChartKind::Scatter,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Dataset::Bar(s) | Dataset::Line(s) => s.len(),
            Dataset::Pie(p) => p.len(),
            Dataset::Scatter(xy) => xy.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Both raw values of a row, or `None` when either is absent or empty.
fn pair<'a>(row: &'a Row, columns: &ResolvedColumns) -> Option<(&'a str, &'a str)> {
    let x = row.get(&columns.x)?;
    let y = row.get(&columns.y)?;
    if x.is_empty() || y.is_empty() {
        return None;
    }
    Some((x, y))
}

/// Finite numbers only; `inf`/`nan` spellings count as non-numeric.
fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Walk `table` and collect the dataset for `kind`. Rows with non-numeric
/// values where a number is required are skipped with a warning.
pub fn build_dataset(table: &Table, kind: ChartKind, columns: &ResolvedColumns) -> Dataset {
    let pairs = table.rows().iter().filter_map(|row| pair(row, columns));
    match kind {
        ChartKind::Bar | ChartKind::Line => {
            let mut series = CategorySeries::new(CATEGORY_SERIES_NAME);
            for (x, y) in pairs {
                match parse_number(y) {
                    Some(v) => series.push(x, v),
                    None => warn!(value = y, "skipping non-numeric value"),
                }
            }
            if kind == ChartKind::Bar { Dataset::Bar(series) } else { Dataset::Line(series) }
        }
        ChartKind::Pie => {
            let mut pie = PieDataset::new();
            for (x, y) in pairs {
                match parse_number(y) {
                    Some(v) => pie.set(x, v),
                    None => warn!(value = y, "skipping non-numeric value"),
                }
            }
            Dataset::Pie(pie)
        }
        ChartKind::Scatter => {
            let mut xy = XyDataset::new(XY_SERIES_NAME);
            for (x, y) in pairs {
                match (parse_number(x), parse_number(y)) {
                    (Some(xv), Some(yv)) => xy.push(xv, yv),
                    _ => warn!(x, y, "skipping non-numeric point"),
                }
            }
            Dataset::Scatter(xy)
        }
    }
}
