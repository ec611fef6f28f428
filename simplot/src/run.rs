use std::{fs, path::Path, path::PathBuf};

use colored::Colorize;
use thiserror::Error;
use trace::{SimulationTrace, TraceError, schema};

use crate::{Cli, charts};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("trace path '{0}' is not a .csv file with a usable name")]
    MalformedPath(PathBuf),
    #[error("{0}")]
    Trace(#[from] TraceError),
    #[error("{0}")]
    Plot(#[from] plotting::PlotError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// The run name is the trace file's stem: `output/test_run.csv` names the
/// run `test_run`. Paths without a `.csv` extension or a usable stem are
/// rejected before any directory is created.
pub fn derive_run_name(trace_path: &Path) -> Result<String, CliError> {
    let malformed = || CliError::MalformedPath(trace_path.to_path_buf());
    let extension = trace_path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(malformed)?;
    if !extension.eq_ignore_ascii_case("csv") {
        return Err(malformed());
    }
    let stem = trace_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(malformed)?;
    if stem.is_empty() {
        return Err(malformed());
    }
    Ok(stem.to_string())
}

/// Loads the trace, validates the schema, renders every chart into
/// `<out_dir>/<run_name>/`, and returns the path of the attitude chart.
pub fn run(cli: &Cli) -> Result<PathBuf, CliError> {
    let run_name = match &cli.run_name {
        Some(name) => name.clone(),
        None => derive_run_name(&cli.trace)?,
    };

    let trace = SimulationTrace::from_path(&cli.trace)?;
    let wheels = schema::validate(&trace)?;
    let charts = charts::chart_set(&trace, &wheels)?;

    let run_dir = cli.out_dir.join(&run_name);
    fs::create_dir_all(&run_dir)?;

    for chart in &charts {
        let path = run_dir.join(&chart.file_name);
        plotting::render_png(&chart.figure, &path)?;
        println!("{} {}", "wrote".green(), path.display());
    }
    println!(
        "{}",
        format!(
            "{} charts for run '{}' in {}",
            charts.len(),
            run_name,
            run_dir.display()
        )
        .bold()
    );

    Ok(run_dir.join(charts::POSITION_CHART_FILE))
}
