use std::io::{BufRead, Write};

use joggerload::{AnalysisOptions, BridgeParameters, ParameterFile, DEFAULT_JOGGER_VELOCITY};
use thiserror::Error;

/// Error returned while asking for a value on the terminal.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Returned when reading input or writing the prompt fails.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Returned when input ends before the value is given.
    #[error("input ended while waiting for {0}")]
    EndOfInput(&'static str),
    /// Returned when the answer is not a number.
    #[error("{label}: '{text}' is not a number")]
    InvalidNumber {
        /// Prompt that was answered.
        label: &'static str,
        /// Text that was entered.
        text: String,
    },
}

/// Reads missing parameters from `input`, writing prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one number.
    fn ask(&mut self, label: &'static str) -> Result<f64, PromptError> {
        write!(self.output, "{label:<33}= ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput(label));
        }
        let text = line.trim();
        text.parse().map_err(|_| PromptError::InvalidNumber {
            label,
            text: text.to_owned(),
        })
    }

    /// Use `known` when present, otherwise ask for the value.
    fn value_or_ask(
        &mut self,
        known: Option<f64>,
        label: &'static str,
    ) -> Result<f64, PromptError> {
        match known {
            Some(value) => Ok(value),
            None => self.ask(label),
        }
    }

    /// Fill in every parameter `known` leaves open, in the order frequency,
    /// span, velocity, damping, modal mass.
    pub fn complete(
        &mut self,
        known: ParameterFile,
        options: &AnalysisOptions,
    ) -> Result<BridgeParameters, PromptError> {
        let frequency = self.value_or_ask(known.frequency, "Resonance frequency at span [Hz]")?;
        let span_length = self.value_or_ask(known.span_length, "Length of span [m]")?;
        let jogger_velocity = match known.jogger_velocity {
            Some(velocity) => velocity,
            None if options.override_velocity => self.ask("Velocity joggers [m/s]")?,
            None => {
                writeln!(
                    self.output,
                    "{:<33}= {DEFAULT_JOGGER_VELOCITY}",
                    "Assumed velocity jogger [m/s]"
                )?;
                DEFAULT_JOGGER_VELOCITY
            }
        };
        let damping_ratio = self.value_or_ask(known.damping_ratio, "Damping of bridge [-]")?;
        let modal_mass = self.value_or_ask(known.modal_mass, "Generalized mass [kg]")?;

        Ok(BridgeParameters::new(
            span_length,
            jogger_velocity,
            frequency,
            damping_ratio,
            modal_mass,
        ))
    }
}
