//! Test-only helpers shared by unit and integration tests.

use std::io::{self, Write};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use regex::Regex;

use crate::COMPLETION_MESSAGE;
use crate::banner::{BANNER_TITLE, PROCESSING_LABEL};
use crate::config::ScriptConfig;

/// Default counts with a 1 ms pause.
pub fn fast_config() -> ScriptConfig {
    ScriptConfig {
        pause: Duration::from_millis(1),
        ..ScriptConfig::default()
    }
}

/// Deterministic rng for reproducible color choices.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Run the full script into a string.
pub fn render(config: &ScriptConfig, seed: u64) -> String {
    let mut out = Vec::new();
    crate::run(&mut out, &mut seeded_rng(seed), config).expect("run script");
    String::from_utf8(out).expect("utf8 output")
}

/// Assert the complete output of a default run: banner first, five dots,
/// lines 1..=5 in a known color each, completion message last.
pub fn assert_output_layout(output: &str) {
    assert_eq!(output.matches(BANNER_TITLE).count(), 1);
    assert_eq!(output.matches(COMPLETION_MESSAGE).count(), 1);
    assert!(output.starts_with(BANNER_TITLE));
    assert!(output.trim_end().ends_with(COMPLETION_MESSAGE));

    let processing = format!("{PROCESSING_LABEL}.....\n");
    assert_eq!(output.matches(&processing).count(), 1);

    let line_re = Regex::new(
        r"(?m)^\x1b\[(?:92|94|93|91)mLine (\d+): TaskMaster can run Python scripts!\x1b\[0m$",
    )
    .expect("regex");
    let numbers: Vec<u32> = line_re
        .captures_iter(output)
        .map(|caps| caps[1].parse().expect("line number"))
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);

    let title = output.find(BANNER_TITLE).expect("title");
    let dots = output.find(&processing).expect("dots");
    let first = output.find("Line 1:").expect("first line");
    let done = output.find(COMPLETION_MESSAGE).expect("completion");
    assert!(title < dots && dots < first && first < done);
}

/// Writer that snapshots everything written so far on every `flush`.
#[derive(Debug, Default)]
pub struct FlushRecorder {
    buf: Vec<u8>,
    pub flushed: Vec<String>,
}

impl Write for FlushRecorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushed.push(String::from_utf8_lossy(&self.buf).into_owned());
        Ok(())
    }
}

/// Writer whose every write fails, as a closed pipe would.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}
