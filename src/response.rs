//! Transient response of the span to a passing jogger group.
//!
//! The span is a damped single degree of freedom oscillator. While the group
//! is on the span, the load acts through the first mode shape, so the
//! generalised force varies as `sin(a t)` with `a = π v / L`. The resonant
//! amplitude builds up as `1 - exp(-t / T)` with `T = 1 / (2π f ζ)`. The
//! functions here give the amplitude ratio `y`, normalised to the steady
//! resonant amplitude, together with its first two time derivatives.
//!
//! All three share the denominator `(aT)² + 1`. They assume `a > 0` and
//! `T > 0`; use [`ResponseParameters::new`] to have that checked.

use std::f64::consts::PI;

use serde::Serialize;

use crate::errors::{InputError, Parameter};

/// Common denominator of the closed-form solution.
fn denominator(a: f64, time_constant: f64) -> f64 {
    let at = a * time_constant;
    at * at + 1.0
}

/// Amplitude ratio `y(t)` at elapsed time `t`.
///
/// `a` is the angular frequency of load encounter and `time_constant` the
/// slowness of the rising amplitude.
///
/// # Examples
///
/// ```
/// use joggerload::amplitude_ratio;
///
/// assert!(amplitude_ratio(0.0, 0.94, 9.47).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn amplitude_ratio(t: f64, a: f64, time_constant: f64) -> f64 {
    (-a * time_constant * (a * t).cos()
        + a * time_constant * (-t / time_constant).exp()
        + (a * t).sin())
        / denominator(a, time_constant)
}

/// First time derivative of [`amplitude_ratio`].
#[must_use]
pub fn amplitude_ratio_rate(t: f64, a: f64, time_constant: f64) -> f64 {
    (a.powi(2) * time_constant * (a * t).sin() + a * (a * t).cos()
        - a * (-t / time_constant).exp())
        / denominator(a, time_constant)
}

/// Second time derivative of [`amplitude_ratio`].
#[must_use]
pub fn amplitude_ratio_curvature(t: f64, a: f64, time_constant: f64) -> f64 {
    (a.powi(3) * time_constant * (a * t).cos() - a.powi(2) * (a * t).sin()
        + a * (-t / time_constant).exp() / time_constant)
        / denominator(a, time_constant)
}

/// The two derived parameters that fully determine the response curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResponseParameters {
    /// Angular frequency of load encounter `a = π v / L` in rad/s.
    pub angular_frequency: f64,
    /// Rise time constant `T = 1 / (2π f ζ)` in seconds.
    pub time_constant: f64,
}

impl ResponseParameters {
    /// Create parameters from an angular frequency and a time constant.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when either value is not strictly positive and
    /// finite.
    pub fn new(angular_frequency: f64, time_constant: f64) -> Result<Self, InputError> {
        Ok(Self {
            angular_frequency: InputError::check(Parameter::AngularFrequency, angular_frequency)?,
            time_constant: InputError::check(Parameter::TimeConstant, time_constant)?,
        })
    }

    /// Derive the parameters from span length (m), jogger velocity (m/s),
    /// bridge frequency (Hz) and damping ratio.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when a derived value is not strictly positive
    /// and finite, for example for a zero velocity or damping ratio.
    ///
    /// # Examples
    ///
    /// ```
    /// use joggerload::ResponseParameters;
    ///
    /// let params = ResponseParameters::from_crossing(10.0, 3.0, 2.8, 0.006)
    ///     .expect("valid crossing");
    /// assert!((params.angular_frequency - 0.942_477_796).abs() < 1.0e-9);
    /// assert!((params.time_constant - 9.473_508_517).abs() < 1.0e-9);
    /// ```
    pub fn from_crossing(
        span_length: f64,
        velocity: f64,
        frequency: f64,
        damping_ratio: f64,
    ) -> Result<Self, InputError> {
        Self::new(
            PI * velocity / span_length,
            1.0 / (2.0 * PI * frequency * damping_ratio),
        )
    }

    /// Time at which the load has travelled half a forcing period, `π / a`.
    #[must_use]
    pub fn half_period(&self) -> f64 {
        PI / self.angular_frequency
    }

    /// Amplitude ratio at elapsed time `t`.
    #[must_use]
    pub fn amplitude_ratio(&self, t: f64) -> f64 {
        amplitude_ratio(t, self.angular_frequency, self.time_constant)
    }

    /// Rate of change of the amplitude ratio at `t`.
    #[must_use]
    pub fn rate(&self, t: f64) -> f64 {
        amplitude_ratio_rate(t, self.angular_frequency, self.time_constant)
    }

    /// Curvature of the amplitude ratio at `t`.
    #[must_use]
    pub fn curvature(&self, t: f64) -> f64 {
        amplitude_ratio_curvature(t, self.angular_frequency, self.time_constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    /// Central difference of `f` at `t`.
    fn central_difference(f: impl Fn(f64) -> f64, t: f64) -> f64 {
        let h = 1.0e-5;
        (f(t + h) - f(t - h)) / (2.0 * h)
    }

    #[test]
    fn starts_from_rest() {
        for (a, time_constant) in [(0.94, 9.47), (0.1, 0.5), (5.0, 100.0), (2.0, 1.0e-3)] {
            assert_abs_diff_eq!(amplitude_ratio(0.0, a, time_constant), 0.0, epsilon = 1.0e-12);
            assert_abs_diff_eq!(
                amplitude_ratio_rate(0.0, a, time_constant),
                0.0,
                epsilon = 1.0e-12
            );
        }
    }

    #[test]
    fn derivatives_match_central_differences() {
        let cases = [
            (0.5, 0.94, 9.47),
            (2.0, 0.94, 9.47),
            (3.13, 0.94, 9.47),
            (1.0, 0.2356, 6.63),
            (0.1, 3.0, 0.8),
        ];
        for (t, a, time_constant) in cases {
            let rate = amplitude_ratio_rate(t, a, time_constant);
            let numeric_rate = central_difference(|s| amplitude_ratio(s, a, time_constant), t);
            assert_abs_diff_eq!(rate, numeric_rate, epsilon = 1.0e-7);

            let curvature = amplitude_ratio_curvature(t, a, time_constant);
            let numeric_curvature =
                central_difference(|s| amplitude_ratio_rate(s, a, time_constant), t);
            assert_abs_diff_eq!(curvature, numeric_curvature, epsilon = 1.0e-6);
        }
    }

    #[test]
    fn short_time_constant_follows_the_forcing() {
        // With heavy damping the response keeps up with the load, so the
        // ratio peaks at 1 when the group is at midspan.
        let a = 1.0;
        let time_constant = 1.0e-4;
        assert_abs_diff_eq!(
            amplitude_ratio(PI / (2.0 * a), a, time_constant),
            1.0,
            epsilon = 1.0e-6
        );
    }

    #[test]
    fn parameters_are_derived_from_the_crossing() {
        let params =
            ResponseParameters::from_crossing(10.0, 3.0, 2.8, 0.006).expect("valid crossing");
        assert_abs_diff_eq!(params.angular_frequency, 0.942_477_796_076_937_9, epsilon = 1.0e-15);
        assert_abs_diff_eq!(params.time_constant, 9.473_508_517_374_722, epsilon = 1.0e-12);
        assert_abs_diff_eq!(params.half_period(), 10.0 / 3.0, epsilon = 1.0e-12);
        assert_eq!(
            params.amplitude_ratio(1.5),
            amplitude_ratio(1.5, params.angular_frequency, params.time_constant)
        );
    }

    #[test]
    fn zero_damping_is_rejected() {
        let error = ResponseParameters::from_crossing(10.0, 3.0, 2.8, 0.0)
            .expect_err("infinite time constant is rejected");
        assert!(matches!(
            error,
            InputError::NonFinite {
                parameter: Parameter::TimeConstant,
                ..
            }
        ));
    }

    #[test]
    fn zero_velocity_is_rejected() {
        let error = ResponseParameters::from_crossing(10.0, 0.0, 2.8, 0.006)
            .expect_err("zero angular frequency is rejected");
        assert_eq!(
            error,
            InputError::NonPositive {
                parameter: Parameter::AngularFrequency,
                value: 0.0
            }
        );
    }

    proptest! {
        #[test]
        fn rate_is_derivative_of_ratio(
            t in 0.05_f64..20.0,
            a in 0.05_f64..5.0,
            time_constant in 0.5_f64..50.0,
        ) {
            let rate = amplitude_ratio_rate(t, a, time_constant);
            let numeric = central_difference(|s| amplitude_ratio(s, a, time_constant), t);
            prop_assert!((rate - numeric).abs() < 1.0e-6);
        }
    }
}
