use joggerload::{analyse, AnalysisOptions, BridgeParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ten metre span at 2.8 Hz with 0.6 % damping, crossed at 3 m/s
    let bridge = BridgeParameters::new(10.0, 3.0, 2.8, 0.006, 10_000.0);

    let summary = analyse(&bridge, &AnalysisOptions::default())?;

    println!(
        "Peak after {:.2} s of {:.2} s crossing, {:.1} % of resonance",
        summary.peak_time,
        summary.walk_time,
        summary.peak_ratio * 100.0
    );
    println!(
        "Maximal acceleration: {:.3} m/s^2 per jogger",
        summary.max_acceleration
    );

    Ok(())
}
