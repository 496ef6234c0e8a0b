//! Fixed pacing and line counts.
//!
//! Nothing here is loaded from disk: the binary always runs with
//! [`ScriptConfig::default`]. Tests build shortened configs.

use std::time::Duration;

use anyhow::{Result, anyhow};

/// Pause before each processing dot.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptConfig {
    /// Number of `.` characters written after `Processing`.
    pub dot_count: u32,

    /// Sleep before each dot.
    pub pause: Duration,

    /// Number of colored lines.
    pub line_count: u32,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            dot_count: 5,
            pause: DEFAULT_PAUSE,
            line_count: 5,
        }
    }
}

impl ScriptConfig {
    pub fn validate(&self) -> Result<()> {
        if self.dot_count == 0 {
            return Err(anyhow!("dot_count must be > 0"));
        }
        if self.line_count == 0 {
            return Err(anyhow!("line_count must be > 0"));
        }
        Ok(())
    }

    /// Lower bound on wall-clock time spent in the processing loop.
    pub fn min_duration(&self) -> Duration {
        self.pause * self.dot_count
    }
}
