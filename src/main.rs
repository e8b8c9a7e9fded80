mod cli;
mod prompt;
mod report;

use clap::Parser;
use cli::Cli;
use joggerload::analyse;
use prompt::Prompter;
use report::{render_samples, render_summary};
use std::error::Error;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.options();

    // Anything not given on the command line or in the config file is asked
    // for interactively. JSON output keeps the prompts off stdout.
    let known = cli.known_parameters()?;
    let stdin = io::stdin();
    let bridge = if cli.json {
        Prompter::new(stdin.lock(), io::stderr()).complete(known, &options)?
    } else {
        Prompter::new(stdin.lock(), io::stdout()).complete(known, &options)?
    };

    let summary = analyse(&bridge, &options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if let Some(samples) = &summary.samples {
        print!("{}", render_samples(samples));
    }
    println!();
    print!("{}", render_summary(&bridge, &summary));

    Ok(())
}
