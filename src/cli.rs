use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use moai_rope::{ModelConfig, SafetyFactor};

/// Rope sizing for moai transport.
#[derive(Debug, Parser)]
#[command(name = "moai-rope")]
#[command(version)]
#[command(about = "Rope breaking loads and required diameters for moai transport", long_about = None)]
pub struct Cli {
    /// JSON configuration file; the paper's parameters are used when absent
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Omit the packing correction, as the original figure scripts did
    #[arg(long, global = true)]
    pub omit_packing: bool,

    /// Override the configured safety factor
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub safety_factor: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Breaking load for each rope diameter (mm)
    BreakingLoad {
        /// Rope diameters in millimetres
        #[arg(required = true, allow_negative_numbers = true)]
        diameters: Vec<f64>,
    },

    /// Required rope diameter for each statue mass (t)
    Diameter {
        /// Statue masses in metric tons
        #[arg(required = true, allow_negative_numbers = true)]
        masses: Vec<f64>,
    },

    /// Required diameters and grip classes for the documented moai
    Verify,

    /// Compare corrected values against the historical figures
    Audit {
        /// Largest accepted difference between a recorded and a computed diameter (mm)
        #[arg(long, default_value_t = 1.0, value_parser = parse_tolerance)]
        tolerance: f64,
    },

    /// Render the paper's figures
    Figures {
        /// Output directory
        #[arg(short, long, default_value = "figures")]
        out: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FigureFormat::Svg)]
        format: FigureFormat,
    },
}

/// File format written by the `figures` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FigureFormat {
    /// Scalable vector graphics drawn with plotters
    Svg,
    /// Chart data as JSON for an external renderer
    Json,
}

/// Accept only positive, finite tolerances.
fn parse_tolerance(text: &str) -> Result<f64, String> {
    let value: f64 = text
        .parse()
        .map_err(|err| format!("`{text}` is not a number: {err}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("tolerance must be positive and finite (received {value})"))
    }
}

impl Cli {
    /// Load the configuration file, if any, and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<ModelConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => ModelConfig::from_path(path)?,
            None => ModelConfig::default(),
        };
        if self.omit_packing {
            config.include_packing = false;
        }
        if let Some(value) = self.safety_factor {
            config.safety_factor = SafetyFactor::new(value)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let cli = Cli::parse_from(["moai-rope", "--omit-packing", "--safety-factor", "5", "verify"]);
        let config = cli.resolve_config().expect("valid overrides");
        assert!(!config.include_packing);
        assert_eq!(config.safety_factor, SafetyFactor::REDUCED);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::parse_from(["moai-rope", "diameter", "86", "82", "--omit-packing"]);
        assert!(cli.omit_packing);
        match cli.command {
            Command::Diameter { masses } => assert_eq!(masses, vec![86.0, 82.0]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn negative_inputs_reach_validation() {
        let cli = Cli::parse_from(["moai-rope", "breaking-load", "-5"]);
        assert!(matches!(cli.command, Command::BreakingLoad { .. }));
        let cli = Cli::parse_from(["moai-rope", "--safety-factor", "-1", "verify"]);
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn audit_tolerance_must_be_positive_and_finite() {
        for bad in ["-1", "0", "NaN", "inf", "wide"] {
            let parsed = Cli::try_parse_from(["moai-rope", "audit", "--tolerance", bad]);
            assert!(parsed.is_err(), "{bad} accepted");
        }
        let cli = Cli::parse_from(["moai-rope", "audit", "--tolerance", "0.5"]);
        assert!(matches!(cli.command, Command::Audit { tolerance } if tolerance == 0.5));
    }

    #[test]
    fn figures_default_to_svg() {
        let cli = Cli::parse_from(["moai-rope", "figures"]);
        match cli.command {
            Command::Figures { out, format } => {
                assert_eq!(out, PathBuf::from("figures"));
                assert_eq!(format, FigureFormat::Svg);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
