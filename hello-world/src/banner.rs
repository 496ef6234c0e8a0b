//! Greeting banner and the simulated processing delay.

use std::io::Write;
use std::thread;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::ScriptConfig;

pub const BANNER_TITLE: &str = "Hello from TaskMaster CLI!";
pub const BANNER_TAGLINE: &str = "This is a demonstration of Python script execution.";
pub const PROCESSING_LABEL: &str = "Processing";
/// Appended once per pause.
pub const DELAY_MARK: char = '.';

const RULE_WIDTH: usize = 30;

/// Write the fixed banner block.
pub fn write_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{BANNER_TITLE}").context("write banner")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH)).context("write banner")?;
    writeln!(out, "{BANNER_TAGLINE}").context("write banner")?;
    writeln!(
        out,
        "Running hello-world version: {}",
        env!("CARGO_PKG_VERSION")
    )
    .context("write banner")?;
    Ok(())
}

/// Write `Processing` followed by one dot per pause.
///
/// Each dot is flushed before the next sleep so a reader of the pipe sees
/// progress as it happens rather than at exit.
pub fn write_processing<W: Write>(out: &mut W, config: &ScriptConfig) -> Result<()> {
    write!(out, "\n{PROCESSING_LABEL}").context("write processing label")?;
    out.flush().context("flush processing label")?;
    debug!(dots = config.dot_count, pause = ?config.pause, "processing");
    for _ in 0..config.dot_count {
        thread::sleep(config.pause);
        write!(out, "{DELAY_MARK}").context("write delay mark")?;
        out.flush().context("flush delay mark")?;
    }
    write!(out, "\n\n").context("finish processing line")?;
    Ok(())
}
