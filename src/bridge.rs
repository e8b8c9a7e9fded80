//! Input record describing the bridge and the crossing jogger group.

use uom::si::{
    f64::{Frequency, Length, Mass, Ratio, Velocity},
    frequency::hertz,
    length::meter,
    mass::kilogram,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::errors::{InputError, Parameter};
use crate::response::ResponseParameters;

/// Crossing speed assumed for a jogger group in m/s.
pub const DEFAULT_JOGGER_VELOCITY: f64 = 3.0;

/// Physical description of a single simply supported span and its load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BridgeParameters {
    /// Distance between the supports.
    pub span_length: Length,
    /// Crossing speed of the jogger group.
    pub jogger_velocity: Velocity,
    /// Fundamental vertical frequency of the span.
    pub frequency: Frequency,
    /// Structural damping ratio.
    pub damping_ratio: Ratio,
    /// Generalised mass of the fundamental mode.
    pub modal_mass: Mass,
}

impl BridgeParameters {
    /// Create parameters from SI values: metres, m/s, hertz, a plain ratio and
    /// kilograms.
    ///
    /// # Examples
    /// ```
    /// use joggerload::BridgeParameters;
    ///
    /// let bridge = BridgeParameters::new(10.0, 3.0, 2.8, 0.006, 10_000.0);
    /// assert!(bridge.validate().is_ok());
    /// assert!((bridge.walk_time() - 10.0 / 3.0).abs() < 1.0e-12);
    /// ```
    #[must_use]
    pub fn new(
        span_length: f64,
        jogger_velocity: f64,
        frequency: f64,
        damping_ratio: f64,
        modal_mass: f64,
    ) -> Self {
        Self {
            span_length: Length::new::<meter>(span_length),
            jogger_velocity: Velocity::new::<meter_per_second>(jogger_velocity),
            frequency: Frequency::new::<hertz>(frequency),
            damping_ratio: Ratio::new::<ratio>(damping_ratio),
            modal_mass: Mass::new::<kilogram>(modal_mass),
        }
    }

    /// Span length in metres.
    #[must_use]
    pub fn span_length_m(&self) -> f64 {
        self.span_length.get::<meter>()
    }

    /// Jogger velocity in m/s.
    #[must_use]
    pub fn velocity_m_s(&self) -> f64 {
        self.jogger_velocity.get::<meter_per_second>()
    }

    /// Frequency in hertz.
    #[must_use]
    pub fn frequency_hz(&self) -> f64 {
        self.frequency.get::<hertz>()
    }

    /// Damping ratio as a plain number.
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping_ratio.get::<ratio>()
    }

    /// Modal mass in kilograms.
    #[must_use]
    pub fn modal_mass_kg(&self) -> f64 {
        self.modal_mass.get::<kilogram>()
    }

    /// Check that every parameter is strictly positive and finite.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter, in the order span length,
    /// velocity, frequency, damping ratio, modal mass.
    pub fn validate(&self) -> Result<(), InputError> {
        InputError::check(Parameter::SpanLength, self.span_length_m())?;
        InputError::check(Parameter::JoggerVelocity, self.velocity_m_s())?;
        InputError::check(Parameter::Frequency, self.frequency_hz())?;
        InputError::check(Parameter::DampingRatio, self.damping())?;
        InputError::check(Parameter::ModalMass, self.modal_mass_kg())?;
        Ok(())
    }

    /// Time in seconds the group needs to cross the span.
    #[must_use]
    pub fn walk_time(&self) -> f64 {
        self.span_length_m() / self.velocity_m_s()
    }

    /// Derive the response parameters `a` and `T` of this crossing.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the parameters are invalid.
    pub fn response_parameters(&self) -> Result<ResponseParameters, InputError> {
        self.validate()?;
        ResponseParameters::from_crossing(
            self.span_length_m(),
            self.velocity_m_s(),
            self.frequency_hz(),
            self.damping(),
        )
    }
}
