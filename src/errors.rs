//! Error types produced while validating bridge parameters or loading them
//! from a configuration file.

use std::path::PathBuf;

use thiserror::Error;

/// Physical quantity named in an [`InputError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameter {
    /// Distance between the supports.
    SpanLength,
    /// Crossing speed of the jogger group.
    JoggerVelocity,
    /// Fundamental frequency of the span.
    Frequency,
    /// Structural damping ratio.
    DampingRatio,
    /// Generalised modal mass of the span.
    ModalMass,
    /// Angular frequency of load encounter derived from velocity and span.
    AngularFrequency,
    /// Rise time constant derived from frequency and damping.
    TimeConstant,
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Parameter::SpanLength => "span length",
            Parameter::JoggerVelocity => "jogger velocity",
            Parameter::Frequency => "frequency",
            Parameter::DampingRatio => "damping ratio",
            Parameter::ModalMass => "modal mass",
            Parameter::AngularFrequency => "angular frequency",
            Parameter::TimeConstant => "time constant",
        };
        f.write_str(name)
    }
}

/// Error returned when a scalar input cannot be used by the response model.
///
/// Every parameter of the model divides something, so zero and negative
/// values are rejected up front rather than turned into infinities.
///
/// # Examples
///
/// ```
/// use joggerload::{BridgeParameters, InputError, Parameter};
///
/// let error = BridgeParameters::new(10.0, 3.0, 2.8, 0.0, 10_000.0)
///     .validate()
///     .expect_err("zero damping is rejected");
/// assert_eq!(
///     error,
///     InputError::NonPositive { parameter: Parameter::DampingRatio, value: 0.0 }
/// );
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InputError {
    /// Returned when a parameter is zero or negative.
    #[error("{parameter} must be positive (received {value})")]
    NonPositive {
        /// The offending parameter.
        parameter: Parameter,
        /// Rejected value in SI units.
        value: f64,
    },
    /// Returned when a parameter is NaN or infinite.
    #[error("{parameter} must be finite (received {value})")]
    NonFinite {
        /// The offending parameter.
        parameter: Parameter,
        /// Rejected value in SI units.
        value: f64,
    },
}

impl InputError {
    /// Check that `value` is finite and strictly positive.
    pub(crate) fn check(parameter: Parameter, value: f64) -> Result<f64, InputError> {
        if !value.is_finite() {
            Err(InputError::NonFinite { parameter, value })
        } else if value <= 0.0 {
            Err(InputError::NonPositive { parameter, value })
        } else {
            Ok(value)
        }
    }
}

/// Error returned when a parameter file cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the file cannot be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the file is not valid TOML for a parameter set.
    #[error("failed to parse parameter file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_finite_values() {
        assert_eq!(InputError::check(Parameter::ModalMass, 1.0), Ok(1.0));
    }

    #[test]
    fn rejects_zero_negative_and_non_finite_values() {
        assert_eq!(
            InputError::check(Parameter::SpanLength, -2.0),
            Err(InputError::NonPositive {
                parameter: Parameter::SpanLength,
                value: -2.0
            })
        );
        assert!(matches!(
            InputError::check(Parameter::Frequency, f64::INFINITY),
            Err(InputError::NonFinite { .. })
        ));
        assert!(matches!(
            InputError::check(Parameter::Frequency, f64::NAN),
            Err(InputError::NonFinite { .. })
        ));
    }

    #[test]
    fn messages_name_the_parameter() {
        let error = InputError::NonPositive {
            parameter: Parameter::JoggerVelocity,
            value: 0.0,
        };
        assert_eq!(error.to_string(), "jogger velocity must be positive (received 0)");
    }
}
