//! Search for the time of peak amplitude.
//!
//! The peak of `y` is the first zero of its rate inside `[0, π/a]`. It is
//! found with a fixed number of Newton steps on the rate, seeded at three
//! quarters of the window because the rising envelope pushes the peak past
//! midspan. Steps that leave the window are pulled back in: past the end
//! they stop at `π/a`, below zero they restart at `0.45 π/a`. A step with
//! no defined root, once `(aT)²` overflows, also stops at `π/a`. The iteration
//! count and both clamps determine the reported values and must not change.

use tracing::trace;

use crate::response::{amplitude_ratio_curvature, amplitude_ratio_rate};

/// Number of Newton steps taken by [`find_peak_time`].
pub const PEAK_SEARCH_ITERATIONS: usize = 6;

/// Fraction of the window used as the starting guess.
const INITIAL_GUESS: f64 = 0.75;

/// Fraction of the window used to restart after a step below zero.
const RESTART_GUESS: f64 = 0.45;

/// Which bound of the window, if any, was applied after a Newton step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clamp {
    /// The step stayed inside the window.
    None,
    /// The step passed `π/a`, or had no root, and was set to `π/a`.
    Upper,
    /// The step went below zero and was restarted inside the window.
    Lower,
}

/// One iteration of the peak search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewtonStep {
    /// Time after the step and clamp, in seconds.
    pub time: f64,
    /// Curvature of `y` at the previous time, the slope of the tangent line.
    pub slope: f64,
    /// Intercept of the tangent line to the rate of `y`.
    pub intercept: f64,
    /// Bound applied to the step.
    pub clamp: Clamp,
}

impl NewtonStep {
    /// Value of the tangent line at the clamped time. Zero unless clamped.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.slope * self.time + self.intercept
    }
}

/// Result of [`trace_peak_search`].
#[derive(Clone, Debug, PartialEq)]
pub struct PeakSearch {
    /// Upper bound of the search window, `π/a`.
    pub window: f64,
    /// Final estimate of the peak time.
    pub time: f64,
    /// Every step taken, in order.
    pub steps: Vec<NewtonStep>,
}

/// Perform a single clamped Newton step from `t`.
fn newton_step(t: f64, a: f64, time_constant: f64, window: f64) -> NewtonStep {
    let slope = amplitude_ratio_curvature(t, a, time_constant);
    let intercept = amplitude_ratio_rate(t, a, time_constant) - slope * t;
    let mut time = -intercept / slope;
    let mut clamp = Clamp::None;
    if time.is_nan() || time > window {
        time = window;
        clamp = Clamp::Upper;
    }
    if time < 0.0 {
        time = RESTART_GUESS * window;
        clamp = Clamp::Lower;
    }
    let step = NewtonStep {
        time,
        slope,
        intercept,
        clamp,
    };
    trace!(
        t = step.time,
        slope,
        intercept,
        residual = step.residual(),
        ?clamp,
        "newton step"
    );
    step
}

/// Return the time in `[0, π/a]` at which the amplitude ratio peaks.
///
/// `a` must be positive and `time_constant` must be positive; see
/// [`ResponseParameters`](crate::ResponseParameters).
///
/// # Examples
///
/// ```
/// use joggerload::find_peak_time;
///
/// let a = std::f64::consts::PI * 3.0 / 10.0;
/// let time_constant = 1.0 / (2.0 * std::f64::consts::PI * 2.8 * 0.006);
/// let t = find_peak_time(a, time_constant);
/// assert!((t - 3.130_03).abs() < 1.0e-5);
/// ```
#[must_use]
pub fn find_peak_time(a: f64, time_constant: f64) -> f64 {
    let window = std::f64::consts::PI / a;
    let mut t = INITIAL_GUESS * window;
    trace!(t, window, "starting peak search");
    for _ in 0..PEAK_SEARCH_ITERATIONS {
        t = newton_step(t, a, time_constant, window).time;
    }
    t
}

/// Same search as [`find_peak_time`], keeping every step for inspection.
#[must_use]
pub fn trace_peak_search(a: f64, time_constant: f64) -> PeakSearch {
    let window = std::f64::consts::PI / a;
    let mut t = INITIAL_GUESS * window;
    let mut steps = Vec::with_capacity(PEAK_SEARCH_ITERATIONS);
    for _ in 0..PEAK_SEARCH_ITERATIONS {
        let step = newton_step(t, a, time_constant, window);
        t = step.time;
        steps.push(step);
    }
    PeakSearch {
        window,
        time: t,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{amplitude_ratio, amplitude_ratio_rate};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn reference_crossing_peaks_before_the_group_leaves() {
        let a = PI * 3.0 / 10.0;
        let time_constant = 1.0 / (2.0 * PI * 2.8 * 0.006);
        let t = find_peak_time(a, time_constant);
        assert_abs_diff_eq!(t, 3.130_030_929_359_327_4, epsilon = 1.0e-12);
        assert_abs_diff_eq!(amplitude_ratio_rate(t, a, time_constant), 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn peak_is_a_maximum() {
        let (a, time_constant) = (0.2356, 6.63);
        let t = find_peak_time(a, time_constant);
        let peak = amplitude_ratio(t, a, time_constant);
        assert!(peak > amplitude_ratio(t - 0.1, a, time_constant));
        assert!(peak > amplitude_ratio(t + 0.1, a, time_constant));
    }

    #[test]
    fn heavy_damping_peaks_at_midspan() {
        let t = find_peak_time(1.0, 1.0e-6);
        assert_abs_diff_eq!(t, PI / 2.0, epsilon = 1.0e-5);
    }

    #[test]
    fn overshooting_step_is_clamped_to_window() {
        // A slow rise makes the first step overshoot π/a.
        let search = trace_peak_search(1.0, 100.0);
        assert_eq!(search.steps[0].clamp, Clamp::Upper);
        assert_eq!(search.steps[0].time, search.window);
        assert!(search.time <= search.window);
        assert!(search.time > 0.0);
    }

    #[test]
    fn overflowing_time_constant_stays_in_window() {
        // (aT)^2 overflows, leaving a tangent line with zero slope and intercept.
        let t = find_peak_time(1.0, 1.0e200);
        assert_eq!(t, PI);

        let search = trace_peak_search(1.0, 1.0e160);
        assert!(search.steps.iter().all(|step| step.clamp == Clamp::Upper));
        assert_eq!(search.time, search.window);
    }

    #[test]
    fn trace_matches_plain_search() {
        for (a, time_constant) in [(0.94, 9.47), (1.0, 100.0), (50.0, 1.0e-3), (0.01, 1.0e3)] {
            let search = trace_peak_search(a, time_constant);
            assert_eq!(search.steps.len(), PEAK_SEARCH_ITERATIONS);
            assert_eq!(
                search.time.to_bits(),
                find_peak_time(a, time_constant).to_bits()
            );
        }
    }

    #[test]
    fn unclamped_steps_land_on_the_tangent_root() {
        let search = trace_peak_search(0.94, 9.47);
        for step in search.steps.iter().filter(|step| step.clamp == Clamp::None) {
            assert_abs_diff_eq!(step.residual(), 0.0, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let first = find_peak_time(0.7, 3.3);
        for _ in 0..10 {
            assert_eq!(find_peak_time(0.7, 3.3).to_bits(), first.to_bits());
        }
    }

    proptest! {
        #[test]
        fn peak_time_stays_in_window(
            a in 1.0e-3_f64..100.0,
            time_constant in 1.0e-8_f64..1.0e200,
        ) {
            let t = find_peak_time(a, time_constant);
            prop_assert!(t >= 0.0);
            prop_assert!(t <= PI / a);
        }
    }
}
