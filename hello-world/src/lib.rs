//! Demonstration program for external script runners.
//!
//! Prints a greeting banner, simulates a short processing delay, and emits a
//! handful of randomly colored lines so a caller can verify that it captured
//! the child's stdout. The emitters are generic over [`std::io::Write`] and
//! [`rand::Rng`]; the binary wires them to stdout and `thread_rng()`.

pub mod banner;
pub mod colored;
pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod palette;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

use std::io::Write;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::debug;

use crate::config::ScriptConfig;

/// Final line written after every other section.
pub const COMPLETION_MESSAGE: &str = "Script completed successfully!";

/// Run the whole script: banner, processing dots, colored lines, completion.
pub fn run<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    config: &ScriptConfig,
) -> Result<()> {
    config.validate()?;

    banner::write_banner(out)?;
    banner::write_processing(out, config)?;
    colored::write_colored_lines(out, rng, config)?;

    writeln!(out, "\n{COMPLETION_MESSAGE}").context("write completion message")?;
    out.flush().context("flush stdout")?;
    debug!("script finished");
    Ok(())
}
