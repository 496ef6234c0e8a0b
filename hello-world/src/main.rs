//! Prints a greeting, a short processing animation, and colored lines.
//!
//! Takes no arguments and reads no configuration. Exits 0 on success and
//! [`exit_codes::FAILURE`] if stdout cannot be written.

use std::io;

use anyhow::Result;
use hello_world::config::ScriptConfig;
use hello_world::{exit_codes, logging};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILURE);
    }
    std::process::exit(exit_codes::OK);
}

fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut rng = rand::thread_rng();
    hello_world::run(&mut out, &mut rng, &ScriptConfig::default())
}
