//! # inflate_cut Main Entry Point
//!
//! Reads `<polygon count> <vertex count>` from stdin and writes one exchange
//! record per generated polygon to stdout. An optional first argument names a
//! JSON file holding a `GeneratorConfig`. Logging goes to stderr and is
//! controlled by `RUST_LOG`.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;
use std::io::{self, BufWriter, Read, Write};

use log::{error, info};

use inflate_cut::generator::batch;
use inflate_cut::polygon::exchange;
use inflate_cut::GeneratorConfig;

fn load_config() -> Result<GeneratorConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("loading config from {}", path);
            Ok(GeneratorConfig::load(&path)?)
        }
        None => Ok(GeneratorConfig::default()),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let (count, n) = exchange::parse_request(&input)?;
    if count == 0 || n == 0 {
        info!("nothing to generate");
        return Ok(());
    }

    let seed = batch::base_seed(&config);
    let polygons = batch::generate_batch(count, n, seed, &config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for polygon in &polygons {
        info!("polygon with {} vertices, area {}", polygon.len(), polygon.area());
        exchange::write_record(&mut out, &polygon.to_points(config.convention), config.layout)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}
