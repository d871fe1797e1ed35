use std::io::{self, Write};
use std::process::exit;

use clap::Parser;
use log::info;

use sparse_field::driver::{DriverConfig, DriverError, RandomDriver};

/// Exercises a sparse vector with random operations, printing the vector after each of them.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// Dimension of the vectors
    #[arg(long, default_value_t = 100)]
    dimension: usize,
    /// Fraction of the components that is set when creating a random vector
    #[arg(long, default_value_t = 0.1)]
    density: f64,
    /// Number of operations to perform
    #[arg(long, default_value_t = 10_101)]
    calls: usize,
    /// Distance between consecutive values that can be drawn
    #[arg(long, default_value_t = 2.5)]
    step: f64,
    /// Seed of the random number generator
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Opts> for DriverConfig {
    fn from(opts: Opts) -> Self {
        Self {
            dimension: opts.dimension,
            density: opts.density,
            calls: opts.calls,
            step: opts.step,
            seed: opts.seed,
        }
    }
}

fn run(config: DriverConfig) -> Result<(), DriverError> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut driver = RandomDriver::new(config)?;
    driver.run(&mut out)?;
    out.flush()?;

    Ok(())
}

fn main() {
    env_logger::init();

    let opts: Opts = Opts::parse();
    info!("Options: {:?}", opts);

    if let Err(error) = run(opts.into()) {
        eprintln!("{}", error);
        exit(1);
    }
}
