//! Peak response of a span to one jogger group crossing it.

use ndarray::Array2;
use serde::Serialize;
use tracing::debug;

use crate::bridge::BridgeParameters;
use crate::config::AnalysisOptions;
use crate::errors::InputError;
use crate::load_factor::{jogger_load, jogger_load_factor, JOGGER_REFERENCE_FORCE};
use crate::peak::find_peak_time;
use crate::response::{amplitude_ratio, ResponseParameters};

/// Number of rows in the plot sample table.
pub const PLOT_SAMPLE_COUNT: usize = 100;

/// Time covered by the plot sample table in seconds.
pub const PLOT_DURATION: f64 = 20.0;

/// Summary of the results of one analysis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisSummary {
    /// Response parameters `a` and `T` derived from the bridge.
    pub response: ResponseParameters,
    /// Time of peak amplitude in seconds after the group enters the span.
    pub peak_time: f64,
    /// Time the group needs to cross the span in seconds.
    pub walk_time: f64,
    /// Peak amplitude ratio relative to the steady resonant amplitude.
    pub peak_ratio: f64,
    /// Frequency dependent load factor.
    pub load_factor: f64,
    /// Dynamic load per jogger in newtons.
    pub jogger_load: f64,
    /// Peak acceleration per jogger in m/s².
    pub max_acceleration: f64,
    /// `(t, y)` rows for plotting, when requested.
    pub samples: Option<Array2<f64>>,
}

impl AnalysisSummary {
    /// Peak time as a fraction of the walk time.
    #[must_use]
    pub fn peak_time_fraction(&self) -> f64 {
        self.peak_time / self.walk_time
    }
}

/// Tabulate the amplitude ratio at `t = i * 20 / 100` for `i` in `0..100`.
///
/// The table ignores the `π/a` window so the free decay is visible too.
#[must_use]
pub fn sample_response(response: &ResponseParameters) -> Array2<f64> {
    Array2::from_shape_fn((PLOT_SAMPLE_COUNT, 2), |(row, column)| {
        let t = row as f64 * PLOT_DURATION / PLOT_SAMPLE_COUNT as f64;
        if column == 0 {
            t
        } else {
            response.amplitude_ratio(t)
        }
    })
}

/// Run the analysis for `bridge`.
///
/// The peak acceleration per jogger is `y(t*) · 1250 N · factor / (2 m ζ)`,
/// the steady resonant acceleration `F / (2 m ζ)` scaled by the peak ratio.
///
/// # Errors
///
/// Returns [`InputError`] when any bridge parameter is zero, negative or not
/// finite.
///
/// # Examples
///
/// ```
/// use joggerload::{analyse, AnalysisOptions, BridgeParameters};
///
/// let bridge = BridgeParameters::new(10.0, 3.0, 2.8, 0.006, 10_000.0);
/// let summary = analyse(&bridge, &AnalysisOptions::default()).expect("valid bridge");
/// assert!((summary.peak_ratio - 0.190_44).abs() < 1.0e-5);
/// assert!(summary.samples.is_none());
/// ```
pub fn analyse(
    bridge: &BridgeParameters,
    options: &AnalysisOptions,
) -> Result<AnalysisSummary, InputError> {
    let response = bridge.response_parameters()?;
    debug!(
        angular_frequency = response.angular_frequency,
        time_constant = response.time_constant,
        "derived response parameters"
    );

    let peak_time = find_peak_time(response.angular_frequency, response.time_constant);
    let peak_ratio = amplitude_ratio(
        peak_time,
        response.angular_frequency,
        response.time_constant,
    );
    debug!(peak_time, peak_ratio, "located peak");

    let frequency = bridge.frequency_hz();
    let load_factor = jogger_load_factor(frequency);
    let max_acceleration = peak_ratio * JOGGER_REFERENCE_FORCE * load_factor
        / (2.0 * bridge.modal_mass_kg() * bridge.damping());

    Ok(AnalysisSummary {
        response,
        peak_time,
        walk_time: bridge.walk_time(),
        peak_ratio,
        load_factor,
        jogger_load: jogger_load(frequency),
        max_acceleration,
        samples: options.plot_samples.then(|| sample_response(&response)),
    })
}
