//! CLI tests for the `hello-world` binary.
//!
//! Spawns the real binary the way a script runner would and checks exit
//! code, output layout, and pacing.

use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use hello_world::config::ScriptConfig;
use hello_world::exit_codes;
use hello_world::test_support::assert_output_layout;
use wait_timeout::ChildExt;

struct RunOutput {
    code: Option<i32>,
    stdout: String,
    stderr: String,
    elapsed: Duration,
}

fn run_binary(args: &[&str], envs: &[(&str, &str)]) -> RunOutput {
    let start = Instant::now();
    let mut child = Command::new(env!("CARGO_BIN_EXE_hello-world"))
        .args(args)
        .env_remove("RUST_LOG")
        .envs(envs.iter().copied())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn hello-world");

    let status = child
        .wait_timeout(Duration::from_secs(30))
        .expect("wait")
        .expect("hello-world did not exit within 30s");
    let elapsed = start.elapsed();

    let mut stdout = String::new();
    child
        .stdout
        .take()
        .expect("stdout")
        .read_to_string(&mut stdout)
        .expect("read stdout");
    let mut stderr = String::new();
    child
        .stderr
        .take()
        .expect("stderr")
        .read_to_string(&mut stderr)
        .expect("read stderr");

    RunOutput {
        code: status.code(),
        stdout,
        stderr,
        elapsed,
    }
}

#[test]
fn run_exits_ok_with_expected_layout() {
    let output = run_binary(&[], &[]);

    assert_eq!(output.code, Some(exit_codes::OK));
    assert_output_layout(&output.stdout);
    assert!(output.stderr.is_empty(), "stderr: {}", output.stderr);
    assert!(output.elapsed >= ScriptConfig::default().min_duration());
}

#[test]
fn arguments_are_ignored() {
    let output = run_binary(&["--help", "extra"], &[]);

    assert_eq!(output.code, Some(exit_codes::OK));
    assert_output_layout(&output.stdout);
}

#[test]
fn debug_logging_stays_off_stdout() {
    let output = run_binary(&[], &[("RUST_LOG", "hello_world=debug")]);

    assert_eq!(output.code, Some(exit_codes::OK));
    assert_output_layout(&output.stdout);
    assert!(output.stderr.contains("colored line"));
}
