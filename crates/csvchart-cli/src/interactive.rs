// File: crates/csvchart-cli/src/interactive.rs
// Summary: Prompt-driven mode used when the binary runs without arguments.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use csvchart_core::{ChartKind, ChartRenderer, ChartService};

fn prompt(input: &mut impl BufRead, out: &mut impl Write, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read from standard input")?;
    Ok(line.trim().to_owned())
}

fn optional(answer: String) -> Option<String> {
    (!answer.is_empty()).then_some(answer)
}

/// Ask for path, kind and columns, then generate the chart. Blank column
/// answers fall back to the positional defaults.
pub fn run<R: ChartRenderer>(
    service: &ChartService<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "\n=== CSV Chart Generator ===")?;
    let csv = prompt(input, out, "Enter the path of the CSV file: ")?;
    if csv.is_empty() {
        writeln!(out, "The file path cannot be empty!")?;
        return Ok(());
    }

    writeln!(out, "\nAvailable chart kinds:")?;
    for kind in ChartKind::ALL {
        writeln!(out, "- {}", kind.name())?;
    }
    let answer = prompt(input, out, "Enter the chart kind: ")?;
    let Ok(kind) = answer.parse::<ChartKind>() else {
        writeln!(out, "Invalid chart kind!")?;
        return Ok(());
    };

    let x = optional(prompt(input, out, "Enter the X column name (or press Enter to use the first): ")?);
    let y = optional(prompt(input, out, "Enter the Y column name (or press Enter to use the second): ")?);

    let path = service.generate_chart(&csv, kind, x.as_deref(), y.as_deref())?;
    writeln!(out, "Chart saved to: {}", path.display())?;
    writeln!(out, "Chart generated successfully!")?;
    Ok(())
}
