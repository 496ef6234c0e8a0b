//! Randomly colored demo lines.

use std::io::Write;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::debug;

use crate::config::ScriptConfig;
use crate::palette::{Color, RESET};

/// Text shared by every colored line, after the `Line {n}: ` prefix.
pub const LINE_TEXT: &str = "TaskMaster can run Python scripts!";

/// Format line `number` (1-based) wrapped in `color` and the reset suffix.
pub fn colored_line(number: u32, color: Color) -> String {
    format!("{}Line {}: {}{}", color.escape(), number, LINE_TEXT, RESET)
}

/// Write `config.line_count` lines, each in an independently chosen color.
pub fn write_colored_lines<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    config: &ScriptConfig,
) -> Result<()> {
    for number in 1..=config.line_count {
        let color = Color::choose(rng);
        debug!(number, ?color, "colored line");
        writeln!(out, "{}", colored_line(number, color))
            .with_context(|| format!("write colored line {number}"))?;
    }
    Ok(())
}
