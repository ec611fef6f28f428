use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

mod charts;
mod run;
mod view;

#[derive(Debug, Parser)]
#[command(name = "simplot", version, about = "Renders ADCS simulation trace charts")]
pub struct Cli {
    /// Path to the simulation trace CSV
    pub trace: PathBuf,

    /// Root directory for rendered charts
    #[arg(long, default_value = "plots")]
    pub out_dir: PathBuf,

    /// Override the run name derived from the trace filename
    #[arg(long)]
    pub run_name: Option<String>,

    /// Do not open the attitude chart after rendering
    #[arg(long)]
    pub no_show: bool,
}

fn main() {
    let cli = Cli::parse();
    match run::run(&cli) {
        Ok(position_chart) => {
            if !cli.no_show {
                view::show(position_chart);
            }
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}
