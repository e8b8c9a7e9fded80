use std::path::PathBuf;

use clap::Parser;
use joggerload::{AnalysisOptions, ConfigError, ParameterFile};

/// Command line arguments of the `joggerload` binary.
#[derive(Debug, Parser)]
#[command(name = "joggerload", version)]
#[command(about = "Peak vibration of a footbridge span crossed by joggers", long_about = None)]
pub struct Cli {
    /// Fundamental frequency of the span [Hz]
    #[arg(long)]
    pub frequency: Option<f64>,
    /// Length of the span between supports [m]
    #[arg(long)]
    pub span: Option<f64>,
    /// Velocity of the joggers [m/s], 3 m/s when omitted
    #[arg(long)]
    pub velocity: Option<f64>,
    /// Ask for the jogger velocity instead of assuming 3 m/s
    #[arg(short = 'v', long)]
    pub override_velocity: bool,
    /// Damping ratio of the bridge [-]
    #[arg(long)]
    pub damping: Option<f64>,
    /// Generalised modal mass [kg]
    #[arg(long)]
    pub modal_mass: Option<f64>,
    /// Print a `t, y` table of the response for plotting
    #[arg(short = 'p', long)]
    pub plot: bool,
    /// TOML file with any of the bridge parameters
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Options for the analysis run.
    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            plot_samples: self.plot,
            override_velocity: self.override_velocity,
        }
    }

    /// Parameters known before prompting: flags first, then the config file.
    pub fn known_parameters(&self) -> Result<ParameterFile, ConfigError> {
        let file = match &self.config {
            Some(path) => ParameterFile::load(path)?,
            None => ParameterFile::default(),
        };
        Ok(self.overlay(file))
    }

    /// Replace file values with the ones given on the command line.
    fn overlay(&self, file: ParameterFile) -> ParameterFile {
        ParameterFile {
            span_length: self.span.or(file.span_length),
            jogger_velocity: self.velocity.or(file.jogger_velocity),
            frequency: self.frequency.or(file.frequency),
            damping_ratio: self.damping.or(file.damping_ratio),
            modal_mass: self.modal_mass.or(file.modal_mass),
        }
    }
}
