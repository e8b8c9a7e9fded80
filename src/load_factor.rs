//! Frequency dependent reduction of the jogger load.
//!
//! Joggers step at roughly 1.9 to 3.5 Hz. Only the part of a group stepping
//! close to the bridge frequency contributes the full reference force, which
//! the factor below expresses per the HIVOSS jogger bands.

use tracing::warn;

/// Reference dynamic force of a single jogger in newtons.
pub const JOGGER_REFERENCE_FORCE: f64 = 1250.0;

/// Lowest jogging step frequency in hertz.
pub const LOWER_BAND_EDGE: f64 = 1.9;
/// Start of the full resonance plateau in hertz.
pub const PLATEAU_START: f64 = 2.2;
/// End of the full resonance plateau in hertz.
pub const PLATEAU_END: f64 = 2.7;
/// Highest jogging step frequency in hertz.
pub const UPPER_BAND_EDGE: f64 = 3.5;

/// Return the load factor for a bridge with fundamental frequency `frequency`
/// in hertz.
///
/// The ramps on either side of the plateau are products of the band widths
/// rather than normalised slopes, so the factor jumps to 1 at the plateau
/// edges (0.09 just below 2.2 Hz, 0.64 just above 2.7 Hz). Reference
/// results depend on this exact shape.
///
/// # Examples
///
/// ```
/// use joggerload::jogger_load_factor;
///
/// assert_eq!(jogger_load_factor(1.5), 0.0);
/// assert_eq!(jogger_load_factor(2.5), 1.0);
/// assert!((jogger_load_factor(2.8) - 0.56).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn jogger_load_factor(frequency: f64) -> f64 {
    if frequency <= LOWER_BAND_EDGE || frequency >= UPPER_BAND_EDGE {
        0.0
    } else if frequency < PLATEAU_START {
        (frequency - LOWER_BAND_EDGE) * (PLATEAU_START - LOWER_BAND_EDGE)
    } else if frequency <= PLATEAU_END {
        1.0
    } else {
        -(frequency - UPPER_BAND_EDGE) * (UPPER_BAND_EDGE - PLATEAU_END)
    }
}

/// Dynamic load of one jogger in newtons for a bridge of the given frequency.
#[must_use]
pub fn jogger_load(frequency: f64) -> f64 {
    let factor = jogger_load_factor(frequency);
    if factor == 0.0 {
        warn!(frequency, "frequency is outside the jogging band; jogger load is zero");
    }
    factor * JOGGER_REFERENCE_FORCE
}
