// File: crates/csvchart-cli/src/main.rs
// Summary: CLI entry point; renders a chart from two CSV columns to a PNG next to the input.

mod interactive;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use csvchart_core::{file_info, ChartKind, ChartRenderer, ChartService};
use csvchart_render_skia::{theme, RenderOptions, SkiaRenderer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "csvchart", author, version, about = "Render a bar, line, pie or scatter chart from a CSV file to PNG", long_about = None)]
struct Args {
    /// CSV file to read; omit every argument to run interactively
    csv: Option<PathBuf>,

    /// Chart kind: BAR, LINE, PIE or SCATTER (case-insensitive)
    kind: Option<String>,

    /// X column name (defaults to the first column)
    x_col: Option<String>,

    /// Y column name (defaults to the second column)
    y_col: Option<String>,

    /// Print the columns of the CSV file and exit
    #[arg(short, long)]
    list_columns: bool,

    /// Print row and column counts of the CSV file and exit
    #[arg(long)]
    info: bool,

    /// Color theme: light, dark or solarized-light
    #[arg(long, default_value = "light")]
    theme: String,

    /// Render without title, axis names, ticks or legend
    #[arg(long)]
    no_labels: bool,
}

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(version = env!("CARGO_PKG_VERSION"), "csvchart");

    let service = ChartService::new(SkiaRenderer::new(render_options(&args)));
    let stdout = std::io::stdout();
    let outcome = match &args.csv {
        Some(csv) => run_command_line(&service, csv, &args, &mut stdout.lock()),
        None => interactive::run(&service, &mut std::io::stdin().lock(), &mut stdout.lock()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn render_options(args: &Args) -> RenderOptions {
    if !theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(&args.theme)) {
        warn!(theme = %args.theme, "unknown theme, using light");
    }
    RenderOptions {
        theme: theme::find(&args.theme),
        draw_labels: !args.no_labels,
        ..RenderOptions::default()
    }
}

fn usage() -> String {
    let kinds: Vec<&str> = ChartKind::ALL.iter().map(|k| k.name()).collect();
    format!(
        "Usage: csvchart <csv_file> <chart_kind> [x_column] [y_column]\nAvailable chart kinds: {}",
        kinds.join(", ")
    )
}

fn run_command_line<R: ChartRenderer>(
    service: &ChartService<R>,
    csv: &Path,
    args: &Args,
    out: &mut impl Write,
) -> Result<()> {
    if args.info {
        let info = file_info(csv).with_context(|| format!("failed to read '{}'", csv.display()))?;
        writeln!(out, "{info}")?;
        return Ok(());
    }

    if args.list_columns {
        let columns = service
            .list_columns(csv)
            .with_context(|| format!("failed to list columns of '{}'", csv.display()))?;
        writeln!(out, "\nAvailable columns in the file:")?;
        for (i, name) in columns.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, name)?;
        }
        return Ok(());
    }

    let Some(kind) = args.kind.as_deref() else {
        writeln!(out, "{}", usage())?;
        anyhow::bail!("missing chart kind");
    };
    let kind: ChartKind = kind.parse()?;

    let path = service
        .generate_chart(csv, kind, args.x_col.as_deref(), args.y_col.as_deref())
        .with_context(|| format!("failed to generate chart from '{}'", csv.display()))?;
    writeln!(out, "Chart saved to: {}", path.display())?;
    info!("chart generated successfully");
    Ok(())
}
