//! Run options and parameter files.

use std::path::Path;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Switches controlling what a run produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Produce the `(t, y)` sample table for plotting.
    pub plot_samples: bool,
    /// Ask for the jogger velocity instead of assuming the default.
    pub override_velocity: bool,
}

/// Parameters read from a TOML file. Every field is optional so a file can
/// pin some values and leave the rest to the command line or prompts.
///
/// # Examples
///
/// ```
/// use joggerload::ParameterFile;
///
/// let file = ParameterFile::from_toml_str("span_length = 25.0\ndamping_ratio = 0.01\n")
///     .expect("valid parameter file");
/// assert_eq!(file.span_length, Some(25.0));
/// assert_eq!(file.frequency, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterFile {
    /// Span length in metres.
    pub span_length: Option<f64>,
    /// Jogger velocity in m/s.
    pub jogger_velocity: Option<f64>,
    /// Bridge frequency in hertz.
    pub frequency: Option<f64>,
    /// Damping ratio.
    pub damping_ratio: Option<f64>,
    /// Modal mass in kilograms.
    pub modal_mass: Option<f64>,
}

impl ParameterFile {
    /// Parse a parameter set from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys or
    /// non-numeric values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a parameter file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
