// File: crates/csvchart-core/src/kind.rs
// Summary: Closed set of supported chart kinds with display names.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie, ChartKind::Scatter];

    /// Upper-case name accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            ChartKind::Bar => "BAR",
            ChartKind::Line => "LINE",
            ChartKind::Pie => "PIE",
            ChartKind::Scatter => "SCATTER",
        }
    }

    /// Lower-case name used in output file names.
    pub const fn slug(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
        }
    }

    /// Localized chart name used in titles.
    pub const fn display_name(self) -> &'static str {
        match self {
            ChartKind::Bar => "Gráfico de Barras",
            ChartKind::Line => "Gráfico de Linha",
            ChartKind::Pie => "Gráfico de Pizza",
            ChartKind::Scatter => "Gráfico de Dispersão",
        }
    }

    /// Chart title for the resolved columns, e.g. `Gráfico de Barras - sales vs month`.
    pub fn title(self, x: &str, y: &str) -> String {
        let joiner = match self {
            ChartKind::Pie => "por",
            ChartKind::Bar | ChartKind::Line | ChartKind::Scatter => "vs",
        };
        format!("{} - {} {} {}", self.display_name(), y, joiner, x)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name(), self.display_name())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ChartError::UnsupportedChartKind(s.to_owned()))
    }
}
