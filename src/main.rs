mod analysis;
mod cli;
mod figures;
mod logging;
mod plot;
mod report;

use analysis::{assess_specimens, breaking_load_rows, required_diameter_rows, run_audit};
use clap::Parser;
use cli::{Cli, Command, FigureFormat};
use figures::all_charts;
use moai_rope::{ChartSink, JsonChartSink};
use plot::SvgChartSink;
use report::{render_audit, render_rows, render_verification};
use std::error::Error;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    // Diagnostics go to stderr before anything else runs, so configuration
    // problems are logged alongside the error returned below.
    logging::init_tracing();

    // Resolve the model parameters: the paper's values, then the optional
    // configuration file, then any command-line overrides.
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    info!(
        safety_factor = config.safety_factor.value(),
        include_packing = config.include_packing,
        "model configured"
    );

    match cli.command {
        Command::BreakingLoad { diameters } => {
            let rows = breaking_load_rows(&config, &diameters)?;
            println!("{}", render_rows("Breaking load", "kN", &rows));
        }
        Command::Diameter { masses } => {
            let rows = required_diameter_rows(&config, &masses)?;
            println!("{}", render_rows("Required rope diameter", "mm", &rows));
        }
        Command::Verify => {
            // Every documented statue is checked against the grip limits the
            // configuration carries, not only the defaults.
            let assessments = assess_specimens(&config)?;
            println!(
                "{}",
                render_verification(
                    &assessments,
                    config.safety_factor.value(),
                    config.include_packing
                )
            );
        }
        Command::Audit { tolerance } => {
            let summary = run_audit(&config, tolerance)?;
            println!("{}", render_audit(&summary, &config.limits));
        }
        Command::Figures { out, format } => {
            // Chart data is computed once; the sink only decides the file format.
            let charts = all_charts(&config)?;
            let mut sink: Box<dyn ChartSink> = match format {
                FigureFormat::Svg => Box::new(SvgChartSink::new(&out)),
                FigureFormat::Json => Box::new(JsonChartSink::new(&out)),
            };
            for (name, chart) in &charts {
                let path = sink.render(name, chart)?;
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
