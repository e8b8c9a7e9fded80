use joggerload::{sample_response, trace_peak_search, ResponseParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let response = ResponseParameters::from_crossing(25.0, 3.0, 2.4, 0.01)?;

    // Print the response curve as CSV for an external plotting tool
    println!("t,y");
    for row in sample_response(&response).rows() {
        println!("{},{}", row[0], row[1]);
    }

    // Show how the peak search approached its estimate
    let search = trace_peak_search(response.angular_frequency, response.time_constant);
    for (index, step) in search.steps.iter().enumerate() {
        eprintln!("step {index}: t = {:.6} s ({:?})", step.time, step.clamp);
    }

    Ok(())
}
