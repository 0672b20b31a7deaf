//! generate_filter: design the 41-tap, 9 kHz lowpass for 44.1 kHz audio,
//! print its coefficients and write `filter_frequency_response.png` to the
//! working directory.
//!
//! All parameters are fixed; set `RUST_LOG=debug` for design details on
//! stderr.
use anyhow::Result;
use clap::Parser;

use lowpass_design::{run, DesignConfig};

#[derive(Parser, Debug)]
#[command(name = "generate_filter", version, about = "Design a FIR lowpass and plot its frequency response")]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = DesignConfig::default();
    log::debug!("{cfg:?}");

    let stdout = std::io::stdout();
    run(&cfg, &mut stdout.lock())?;
    Ok(())
}
