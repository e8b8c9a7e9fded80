use joggerload::{AnalysisSummary, BridgeParameters};
use ndarray::Array2;
use std::fmt::Write;

/// Render the `t, y` table, one sample per line.
#[must_use]
pub fn render_samples(samples: &Array2<f64>) -> String {
    let mut output = String::new();
    for row in samples.rows() {
        writeln!(&mut output, "{}, {}", row[0], row[1]).expect("writing to string cannot fail");
    }
    output
}

/// Render a textual summary of the jogger crossing.
///
/// Labels are padded to one column so the numbers line up under the
/// interactive prompts.
#[must_use]
pub fn render_summary(bridge: &BridgeParameters, summary: &AnalysisSummary) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "{:<33}= {:.1}  per jogger (load factor {:.3}).",
        "Jogger load [N]", summary.jogger_load, summary.load_factor
    )
    .expect("writing to string cannot fail");

    // The window closes when the group leaves the span, so a peak near 100 %
    // means the amplitude was still growing.
    writeln!(
        &mut output,
        "{:<33}= {:.3} of {:.3} [s] at {:.1} %",
        "t_max",
        summary.peak_time,
        summary.walk_time,
        summary.peak_time_fraction() * 100.0
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "{:<33}= {:.2} % of maximum.",
        "y_max",
        summary.peak_ratio * 100.0
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "{:<33}= {:.4} per jogger (modal mass {:.0} kg, damping {}).",
        "Maximal acceleration [m/s^2]",
        summary.max_acceleration,
        bridge.modal_mass_kg(),
        bridge.damping()
    )
    .expect("writing to string cannot fail");

    output
}
